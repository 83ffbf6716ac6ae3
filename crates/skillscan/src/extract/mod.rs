mod dictionary;
mod matcher;
mod tags;

pub use matcher::TextSkillMatcher;
pub use tags::TagSkillExtractor;

use crate::collect::site;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Unions the two detection methods per posting: structured skill tags and
/// a dictionary scan over the description body. Dedup here is exact-string
/// only; collapsing case/spelling variants is the normalizer's job.
pub struct HybridExtractor {
    matcher: TextSkillMatcher,
}

impl HybridExtractor {
    pub fn standard() -> Self {
        Self {
            matcher: TextSkillMatcher::standard(),
        }
    }

    /// Combined skill set for one detail page. An empty result means the
    /// posting has no identifiable skills and should not be persisted.
    pub fn skills(&self, document: &Html) -> BTreeSet<String> {
        let mut found = TagSkillExtractor::scan(document);
        if let Some(description) = description_text(document) {
            found.extend(self.matcher.scan(&description));
        }
        found
    }
}

fn description_text(document: &Html) -> Option<String> {
    document
        .select(description_selector())
        .next()
        .map(|block| block.text().collect::<Vec<_>>().join(" "))
}

fn description_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(site::DESCRIPTION_SELECTOR).expect("valid description selector")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail_document(tags: &[&str], description: &str) -> Html {
        let tag_items = tags
            .iter()
            .map(|tag| {
                format!(
                    "<li class=\"SkillTagItem_SkillTagItem__MAo9X\">{}</li>",
                    tag
                )
            })
            .collect::<String>();
        Html::parse_document(&format!(
            "<html><body><ul>{}</ul>\
             <div class=\"JobDescription_JobDescription__paragraph__wrapper__WPrKC\">\
             <p>{}</p></div></body></html>",
            tag_items, description
        ))
    }

    #[test]
    fn unions_tags_and_text_matches() {
        let document = detail_document(&["Kotlin", "AWS"], "백엔드는 Spring Boot 기반입니다");
        let extractor = HybridExtractor::standard();
        let skills = extractor.skills(&document);
        assert!(skills.contains("Kotlin"));
        assert!(skills.contains("AWS"));
        assert!(skills.contains("Spring Boot"));
        assert!(skills.contains("Spring"));
    }

    #[test]
    fn dedup_is_exact_string_only() {
        // the tag says "python", the text scan yields canonical "Python";
        // both survive until normalization
        let document = detail_document(&["python"], "Python 경력 3년 이상");
        let skills = HybridExtractor::standard().skills(&document);
        assert!(skills.contains("python"));
        assert!(skills.contains("Python"));
        assert_eq!(skills.iter().filter(|s| *s == "Python").count(), 1);
    }

    #[test]
    fn zero_tags_and_zero_matches_is_empty() {
        let document = detail_document(&[], "열정적인 동료를 찾습니다");
        assert!(HybridExtractor::standard().skills(&document).is_empty());
    }

    #[test]
    fn missing_description_block_still_reads_tags() {
        let document = Html::parse_document(
            "<html><body><ul>\
             <li class=\"SkillTagItem_SkillTagItem__MAo9X\">  Docker  </li>\
             </ul></body></html>",
        );
        let skills = HybridExtractor::standard().skills(&document);
        assert_eq!(skills.len(), 1);
        assert!(skills.contains("Docker"));
    }
}
