use super::dictionary::{self, DictionaryEntry};
use std::collections::BTreeSet;

/// Dictionary-driven free-text scan. Matching is case-insensitive and
/// whole-word; overlapping tokens are not mutually exclusive, so a text
/// mentioning both "Spring Boot" and "Spring" records both.
pub struct TextSkillMatcher {
    entries: &'static [DictionaryEntry],
}

impl TextSkillMatcher {
    pub fn standard() -> Self {
        Self {
            entries: dictionary::entries(),
        }
    }

    /// Tokens present in `text`. Empty when nothing matches; absence is
    /// never an error.
    pub fn scan(&self, text: &str) -> BTreeSet<String> {
        let mut found = BTreeSet::new();
        for entry in self.entries {
            if entry_matches(entry, text) {
                found.insert(entry.canonical.to_string());
            }
        }
        found
    }
}

fn entry_matches(entry: &DictionaryEntry, text: &str) -> bool {
    for candidate in entry.pattern.find_iter(text) {
        match entry.not_followed_by {
            Some(guard) if text[candidate.end()..].starts_with(guard) => continue,
            _ => return true,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> BTreeSet<String> {
        TextSkillMatcher::standard().scan(text)
    }

    #[test]
    fn records_overlapping_tokens_separately() {
        let found = scan("We use Spring Boot and Spring MVC");
        assert!(found.contains("Spring Boot"));
        assert!(found.contains("Spring"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let found = scan("experience with PYTHON and react");
        assert!(found.contains("Python"));
        assert!(found.contains("React"));
    }

    #[test]
    fn whole_word_only() {
        let found = scan("JavaScript and MySQL in production");
        assert!(found.contains("JavaScript"));
        assert!(found.contains("MySQL"));
        assert!(!found.contains("Java"));
        assert!(!found.contains("SQL"));
    }

    #[test]
    fn guarded_token_skips_ampersand_compounds() {
        assert!(!scan("R&D team culture").contains("R"));
        assert!(scan("R is great for stats").contains("R"));
        // a guarded occurrence does not mask a clean one later in the text
        assert!(scan("R&D teams also use R daily").contains("R"));
    }

    #[test]
    fn absence_yields_empty_set() {
        assert!(scan("창의적인 인재를 찾습니다").is_empty());
    }
}
