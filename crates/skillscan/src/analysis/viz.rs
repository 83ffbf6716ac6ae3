//! Chart-ready JSON artifacts for the rendering layer. Rendering itself is
//! someone else's job; these files are the hand-off.

use super::views::SkillDemandReport;
use serde::Serialize;
use serde_json::json;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const ROLE_COUNTS_FILE: &str = "viz.role_counts.json";
pub const TOP_SKILLS_FILE: &str = "viz.top_skills.json";
pub const HEATMAP_FILE: &str = "viz.skill_heatmap.json";
pub const INDEX_FILE: &str = "viz.index.json";

#[derive(Debug)]
pub enum VizError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl fmt::Display for VizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VizError::Io { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
            VizError::Json(err) => write!(f, "failed to encode chart data: {}", err),
        }
    }
}

impl std::error::Error for VizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VizError::Io { source, .. } => Some(source),
            VizError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for VizError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Write every chart artifact plus an index into `out_dir`.
pub fn write_all_viz(out_dir: &Path, report: &SkillDemandReport) -> Result<(), VizError> {
    fs::create_dir_all(out_dir).map_err(|source| VizError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let role_counts = json!({
        "chart": "bar",
        "title": "직무별 신입 채용 공고 수 비교",
        "entries": report.role_counts,
    });
    write_json(out_dir.join(ROLE_COUNTS_FILE), &role_counts)?;

    let top_skills = json!({
        "chart": "bar",
        "title": "직무별 요구 기술 Top N",
        "roles": report.breakdowns,
    });
    write_json(out_dir.join(TOP_SKILLS_FILE), &top_skills)?;

    let heatmap = json!({
        "chart": "heatmap",
        "title": "직무별 주요 기술 스택 요구 비율(%)",
        "skills": report.heatmap.skills,
        "roles": report.heatmap.roles,
        "rows": report.heatmap.rows,
    });
    write_json(out_dir.join(HEATMAP_FILE), &heatmap)?;

    let index = json!({
        "date": report.generated_on,
        "version": 1,
        "files": [ROLE_COUNTS_FILE, TOP_SKILLS_FILE, HEATMAP_FILE],
    });
    write_json(out_dir.join(INDEX_FILE), &index)?;

    Ok(())
}

fn write_json<T: Serialize>(path: PathBuf, value: &T) -> Result<(), VizError> {
    let payload = serde_json::to_string_pretty(value)?;
    fs::write(&path, payload).map_err(|source| VizError::Io { path, source })
}
