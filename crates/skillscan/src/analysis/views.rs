use crate::collect::JobRole;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RoleCountEntry {
    pub role: JobRole,
    pub role_label: &'static str,
    pub postings: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillFrequencyEntry {
    pub skill: String,
    /// Number of the role's postings mentioning the skill.
    pub count: usize,
    /// count / postings for the role × 100.
    pub percentage: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleSkillBreakdown {
    pub role: JobRole,
    pub role_label: &'static str,
    pub total_postings: usize,
    /// Ranked descending by count; ties keep first-encounter order.
    pub entries: Vec<SkillFrequencyEntry>,
}

/// Role × skill coverage matrix over the union of each role's leading
/// skills. `rows` aligns with `roles`, each row with `skills`.
#[derive(Debug, Clone, Serialize)]
pub struct SkillHeatmap {
    pub skills: Vec<String>,
    pub roles: Vec<&'static str>,
    pub rows: Vec<Vec<f32>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillDemandReport {
    pub generated_on: NaiveDate,
    pub role_counts: Vec<RoleCountEntry>,
    pub breakdowns: Vec<RoleSkillBreakdown>,
    pub heatmap: SkillHeatmap,
}
