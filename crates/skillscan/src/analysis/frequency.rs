use super::views::{
    RoleCountEntry, RoleSkillBreakdown, SkillDemandReport, SkillFrequencyEntry, SkillHeatmap,
};
use crate::collect::JobRole;
use crate::dataset::Posting;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const DEFAULT_TOP_N: usize = 20;
/// Per-role leaders feeding the cross-role heatmap columns.
pub const HEATMAP_TOP_N: usize = 15;

/// Aggregates normalized postings into ranked per-role skill demand.
/// Derived output, recomputed per run.
pub struct FrequencyAnalyzer {
    top_n: usize,
}

struct RoleAccumulator {
    role: JobRole,
    total_postings: usize,
    /// All skills for the role, ranked; untruncated so the heatmap can read
    /// true percentages for skills outside the role's top-N.
    entries: Vec<SkillFrequencyEntry>,
    counts: HashMap<String, usize>,
}

impl FrequencyAnalyzer {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn analyze(&self, postings: &[Posting], today: NaiveDate) -> SkillDemandReport {
        let mut accumulators = Vec::new();
        for role in JobRole::ordered() {
            let role_postings: Vec<&Posting> = postings
                .iter()
                .filter(|posting| posting.job_role == role)
                .collect();
            // roles with no postings are absent from the report entirely
            if role_postings.is_empty() {
                continue;
            }
            accumulators.push(accumulate_role(role, &role_postings));
        }

        let role_counts = accumulators
            .iter()
            .map(|acc| RoleCountEntry {
                role: acc.role,
                role_label: acc.role.label(),
                postings: acc.total_postings,
            })
            .collect();

        let breakdowns = accumulators
            .iter()
            .map(|acc| RoleSkillBreakdown {
                role: acc.role,
                role_label: acc.role.label(),
                total_postings: acc.total_postings,
                entries: acc.entries.iter().take(self.top_n).cloned().collect(),
            })
            .collect();

        let heatmap = build_heatmap(&accumulators);

        SkillDemandReport {
            generated_on: today,
            role_counts,
            breakdowns,
            heatmap,
        }
    }
}

fn accumulate_role(role: JobRole, role_postings: &[&Posting]) -> RoleAccumulator {
    let total_postings = role_postings.len();
    let mut encounter_order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for posting in role_postings {
        for skill in &posting.skills {
            if !counts.contains_key(skill) {
                encounter_order.push(skill.clone());
            }
            *counts.entry(skill.clone()).or_insert(0) += 1;
        }
    }

    let mut entries: Vec<SkillFrequencyEntry> = encounter_order
        .into_iter()
        .map(|skill| {
            let count = counts[&skill];
            SkillFrequencyEntry {
                percentage: count as f32 / total_postings as f32 * 100.0,
                skill,
                count,
            }
        })
        .collect();
    // stable sort: ties keep first-encounter order
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    RoleAccumulator {
        role,
        total_postings,
        entries,
        counts,
    }
}

fn build_heatmap(accumulators: &[RoleAccumulator]) -> SkillHeatmap {
    let mut skills: Vec<String> = Vec::new();
    for acc in accumulators {
        for entry in acc.entries.iter().take(HEATMAP_TOP_N) {
            if !skills.contains(&entry.skill) {
                skills.push(entry.skill.clone());
            }
        }
    }
    skills.sort();

    let roles = accumulators.iter().map(|acc| acc.role.label()).collect();
    let rows = accumulators
        .iter()
        .map(|acc| {
            skills
                .iter()
                .map(|skill| {
                    let count = acc.counts.get(skill).copied().unwrap_or(0);
                    count as f32 / acc.total_postings as f32 * 100.0
                })
                .collect()
        })
        .collect();

    SkillHeatmap { skills, roles, rows }
}
