use crate::collect::site;
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Structured extraction: skill labels the site itself tags onto a posting.
pub struct TagSkillExtractor;

impl TagSkillExtractor {
    /// Trimmed text of every skill-tag element, raw as authored. Zero
    /// matching elements is a valid empty result.
    pub fn scan(document: &Html) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        for element in document.select(skill_tag_selector()) {
            let label = element.text().collect::<String>().trim().to_string();
            if !label.is_empty() {
                found.insert(label);
            }
        }
        found
    }
}

fn skill_tag_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(site::SKILL_TAG_SELECTOR).expect("valid skill tag selector")
    })
}
