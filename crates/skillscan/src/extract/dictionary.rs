use regex::Regex;
use std::sync::OnceLock;

/// One canonical vocabulary entry. `not_followed_by` rejects a candidate
/// match when the named character sits immediately after it, which keeps the
/// single-letter "R" from firing inside "R&D".
#[derive(Debug)]
pub(crate) struct DictionaryEntry {
    pub(crate) canonical: &'static str,
    pub(crate) pattern: Regex,
    pub(crate) not_followed_by: Option<char>,
}

// Declaration order is the iteration order. Multi-word tokens sit before the
// single-word prefixes they contain ("Spring Boot" before "Spring"), and
// "JavaScript" before "Java".
const SKILL_DICTIONARY: &[(&str, Option<char>)] = &[
    ("Spring Boot", None),
    ("Next.js", None),
    ("FastAPI", None),
    ("JavaScript", None),
    ("TypeScript", None),
    ("Node.js", None),
    ("Java", None),
    ("Spring", None),
    ("JPA", None),
    ("Kotlin", None),
    ("Python", None),
    ("Django", None),
    ("Flask", None),
    ("React", None),
    ("Vue.js", None),
    ("Redux", None),
    ("Recoil", None),
    ("Svelte", None),
    ("SQL", None),
    ("MySQL", None),
    ("PostgreSQL", None),
    ("Oracle", None),
    ("Redis", None),
    ("MongoDB", None),
    ("MariaDB", None),
    ("AWS", None),
    ("GCP", None),
    ("Azure", None),
    ("Docker", None),
    ("Kubernetes", None),
    ("Git", None),
    ("Pandas", None),
    ("TensorFlow", None),
    ("PyTorch", None),
    ("Scikit-learn", None),
    ("Keras", None),
    ("R", Some('&')),
    ("Tableau", None),
    ("Power BI", None),
];

static ENTRIES: OnceLock<Vec<DictionaryEntry>> = OnceLock::new();

pub(crate) fn entries() -> &'static [DictionaryEntry] {
    ENTRIES
        .get_or_init(|| {
            SKILL_DICTIONARY
                .iter()
                .map(|&(canonical, not_followed_by)| {
                    let pattern =
                        Regex::new(&format!(r"(?i)\b{}\b", regex::escape(canonical)))
                            .expect("dictionary tokens compile to valid patterns");
                    DictionaryEntry {
                        canonical,
                        pattern,
                        not_followed_by,
                    }
                })
                .collect()
        })
        .as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_tokens_precede_their_prefixes() {
        let position = |token: &str| {
            SKILL_DICTIONARY
                .iter()
                .position(|&(canonical, _)| canonical == token)
                .expect("token present")
        };
        assert!(position("Spring Boot") < position("Spring"));
        assert!(position("JavaScript") < position("Java"));
    }

    #[test]
    fn every_entry_compiles() {
        assert_eq!(entries().len(), SKILL_DICTIONARY.len());
    }
}
