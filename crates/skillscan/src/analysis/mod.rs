mod frequency;
mod mapping;
mod normalizer;
mod views;
pub mod viz;

pub use frequency::{FrequencyAnalyzer, DEFAULT_TOP_N, HEATMAP_TOP_N};
pub use mapping::NormalizationMap;
pub use normalizer::SkillNormalizer;
pub use views::{
    RoleCountEntry, RoleSkillBreakdown, SkillDemandReport, SkillFrequencyEntry, SkillHeatmap,
};

use crate::dataset::Posting;
use chrono::NaiveDate;

/// Normalize raw postings, then rank per-role skill demand.
pub fn demand_report(
    postings: &[Posting],
    normalizer: &SkillNormalizer<'_>,
    top_n: usize,
    today: NaiveDate,
) -> SkillDemandReport {
    let normalized = normalizer.normalize_postings(postings);
    FrequencyAnalyzer::new(top_n).analyze(&normalized, today)
}
