use super::mapping::NormalizationMap;
use crate::dataset::Posting;
use std::collections::BTreeSet;

/// Tag text arrives with stray BOM/zero-width characters and uneven
/// whitespace; strip those, collapse runs, lowercase.
pub(crate) fn normalize_variant(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

/// Collapses raw skill strings onto the canonical vocabulary. Lossy by
/// design: variants without a mapping entry are dropped silently.
pub struct SkillNormalizer<'a> {
    map: &'a NormalizationMap,
}

impl<'a> SkillNormalizer<'a> {
    pub fn new(map: &'a NormalizationMap) -> Self {
        Self { map }
    }

    pub fn standard() -> SkillNormalizer<'static> {
        SkillNormalizer {
            map: NormalizationMap::standard(),
        }
    }

    /// Canonical tokens for the recognized inputs; output never exceeds the
    /// input in size.
    pub fn normalize<I, S>(&self, raw: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter()
            .filter_map(|skill| self.map.canonical_for(skill.as_ref()))
            .map(str::to_string)
            .collect()
    }

    /// Rewrites each posting's skill set onto the canonical vocabulary.
    /// Postings whose set normalizes to empty are kept: they still count
    /// toward their role's posting total.
    pub fn normalize_postings(&self, postings: &[Posting]) -> Vec<Posting> {
        postings
            .iter()
            .map(|posting| Posting {
                job_role: posting.job_role,
                company: posting.company.clone(),
                title: posting.title.clone(),
                skills: self.normalize(&posting.skills),
            })
            .collect()
    }
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_variant(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_normalization_strips_and_lowercases() {
        assert_eq!(normalize_for_tests("\u{feff}Spring  Boot "), "spring boot");
        assert_eq!(normalize_for_tests("REACT.JS"), "react.js");
    }

    #[test]
    fn unknown_variants_are_dropped() {
        let normalizer = SkillNormalizer::standard();
        let normalized = normalizer.normalize(["REACT.JS", "vue", "unknownTech"]);
        let expected: BTreeSet<String> =
            ["React", "Vue.js"].into_iter().map(str::to_string).collect();
        assert_eq!(normalized, expected);
    }

    #[test]
    fn cross_method_variants_collapse_to_one_token() {
        // hybrid extraction can persist both the raw tag and the dictionary
        // form of the same skill; normalization merges them
        let normalizer = SkillNormalizer::standard();
        let normalized = normalizer.normalize(["python", "Python"]);
        assert_eq!(normalized.len(), 1);
        assert!(normalized.contains("Python"));
    }

    #[test]
    fn output_never_exceeds_input() {
        let normalizer = SkillNormalizer::standard();
        let raw = ["java", "JAVA", "Java", "garbage"];
        assert!(normalizer.normalize(raw).len() <= raw.len());
    }
}
