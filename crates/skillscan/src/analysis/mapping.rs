use super::normalizer::normalize_variant;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Lookup table collapsing skill spelling/casing variants onto the canonical
/// vocabulary. Passed explicitly so tests can inject alternate vocabularies;
/// the production table lives behind [`NormalizationMap::standard`].
#[derive(Debug)]
pub struct NormalizationMap {
    entries: HashMap<String, String>,
}

static STANDARD_MAP: OnceLock<NormalizationMap> = OnceLock::new();

impl NormalizationMap {
    pub fn standard() -> &'static NormalizationMap {
        STANDARD_MAP.get_or_init(|| {
            const VARIANT_TO_CANONICAL: &[(&str, &str)] = &[
                // C/C++
                ("c++", "C++"),
                ("c / c++", "C++"),
                ("c/c++", "C++"),
                // Python
                ("python", "Python"),
                ("django", "Django"),
                ("flask", "Flask"),
                ("fastapi", "FastAPI"),
                // Java/Kotlin
                ("java", "Java"),
                ("spring", "Spring"),
                ("spring boot", "Spring Boot"),
                ("springboot", "Spring Boot"),
                ("jpa", "JPA"),
                ("kotlin", "Kotlin"),
                // Front-end
                ("javascript", "JavaScript"),
                ("typescript", "TypeScript"),
                ("react", "React"),
                ("react.js", "React"),
                ("vue.js", "Vue.js"),
                ("vue", "Vue.js"),
                ("next.js", "Next.js"),
                ("node.js", "Node.js"),
                ("redux", "Redux"),
                ("recoil", "Recoil"),
                ("svelte", "Svelte"),
                // Databases
                ("sql", "SQL"),
                ("mysql", "MySQL"),
                ("postgresql", "PostgreSQL"),
                ("oracle", "Oracle"),
                ("redis", "Redis"),
                ("mongodb", "MongoDB"),
                ("mariadb", "MariaDB"),
                // Cloud/Infra
                ("aws", "AWS"),
                ("gcp", "GCP"),
                ("azure", "Azure"),
                ("docker", "Docker"),
                ("kubernetes", "Kubernetes"),
                ("git", "Git"),
                ("github", "Git"),
                // Data science
                ("r", "R"),
                ("pandas", "Pandas"),
                ("tensorflow", "TensorFlow"),
                ("pytorch", "PyTorch"),
                ("scikit-learn", "Scikit-learn"),
                ("keras", "Keras"),
                ("tableau", "Tableau"),
                ("power bi", "Power BI"),
            ];

            NormalizationMap::from_pairs(VARIANT_TO_CANONICAL.iter().copied())
        })
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut entries = HashMap::new();
        for (variant, canonical) in pairs {
            entries.insert(normalize_variant(variant), canonical.to_string());
        }
        Self { entries }
    }

    /// Canonical token for `variant`, if the vocabulary recognizes it.
    pub fn canonical_for(&self, variant: &str) -> Option<&str> {
        self.entries
            .get(&normalize_variant(variant))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
