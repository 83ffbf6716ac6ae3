use serde::{Deserialize, Serialize};

/// The job roles the pipeline tracks, in collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobRole {
    ServerDeveloper,
    FrontendDeveloper,
    DataScientist,
}

impl JobRole {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::ServerDeveloper,
            Self::FrontendDeveloper,
            Self::DataScientist,
        ]
    }

    /// Display label, also the `job_role` column value in the persisted CSV.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ServerDeveloper => "서버 개발자",
            Self::FrontendDeveloper => "프론트엔드 개발자",
            Self::DataScientist => "데이터 사이언티스트",
        }
    }

    /// Entry-level listing URL for the role, sorted by popularity.
    pub const fn list_url(self) -> &'static str {
        match self {
            Self::ServerDeveloper => {
                "https://www.wanted.co.kr/wdlist/518/872?country=kr&job_sort=job.popularity_order&years=0&locations=all"
            }
            Self::FrontendDeveloper => {
                "https://www.wanted.co.kr/wdlist/518/669?country=kr&job_sort=job.popularity_order&years=0&locations=all"
            }
            Self::DataScientist => {
                "https://www.wanted.co.kr/wdlist/518/1024?country=kr&job_sort=job.popularity_order&years=0&locations=all"
            }
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        JobRole::ordered()
            .into_iter()
            .find(|role| role.label() == trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for role in JobRole::ordered() {
            assert_eq!(JobRole::from_label(role.label()), Some(role));
        }
    }

    #[test]
    fn unknown_label_is_none() {
        assert_eq!(JobRole::from_label("기획자"), None);
    }
}
