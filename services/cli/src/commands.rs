use chrono::Local;
use clap::Args;
use skillscan::analysis::{self, viz, SkillDemandReport, SkillNormalizer, DEFAULT_TOP_N};
use skillscan::collect::{Collector, StaticHttpSession};
use skillscan::config::AppConfig;
use skillscan::dataset;
use skillscan::error::AppError;
use skillscan::telemetry;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct CollectArgs {
    /// Override the configured output CSV path
    #[arg(long)]
    output: Option<PathBuf>,
    /// Override the per-role posting target
    #[arg(long)]
    target_count: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Collected postings CSV (defaults to the configured output path)
    #[arg(long)]
    input: Option<PathBuf>,
    /// Number of skills to keep per role
    #[arg(long)]
    top_n: Option<usize>,
    /// Directory for chart-ready JSON artifacts
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Skip writing visualization files
    #[arg(long)]
    no_viz: bool,
}

pub(crate) fn run_collect(args: CollectArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    if let Some(output) = args.output {
        config.collect.output_path = output;
    }
    if let Some(target_count) = args.target_count {
        config.collect.target_count = target_count;
    }

    let mut session = StaticHttpSession::new(config.collect.load_timeout)?;
    let collector = Collector::new(config.collect.clone());
    let outcome = collector.run(&mut session);

    if outcome.postings.is_empty() {
        warn!("no postings collected, nothing to persist");
    } else {
        dataset::write_postings_to_path(&config.collect.output_path, &outcome.postings)?;
        info!(
            count = outcome.postings.len(),
            path = %config.collect.output_path.display(),
            "postings persisted"
        );
    }

    // partial results are already on disk when the loop ended early
    match outcome.aborted {
        Some(err) => Err(AppError::Browser(err)),
        None => Ok(()),
    }
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let input = args.input.unwrap_or(config.collect.output_path);
    let top_n = args.top_n.unwrap_or(DEFAULT_TOP_N);

    let postings = dataset::read_postings_from_path(&input)?;
    info!(count = postings.len(), path = %input.display(), "postings loaded");

    let normalizer = SkillNormalizer::standard();
    let report = analysis::demand_report(
        &postings,
        &normalizer,
        top_n,
        Local::now().date_naive(),
    );

    render_report(&report);

    if !args.no_viz {
        let out_dir = args.out_dir.unwrap_or_else(|| PathBuf::from("viz"));
        viz::write_all_viz(&out_dir, &report)?;
        info!(dir = %out_dir.display(), "visualization data written");
    }

    Ok(())
}

fn render_report(report: &SkillDemandReport) {
    println!("Skill demand report (generated {})", report.generated_on);

    println!("\nPostings per role");
    for entry in &report.role_counts {
        println!("- {}: {} postings", entry.role_label, entry.postings);
    }

    for breakdown in &report.breakdowns {
        println!(
            "\n{} — top {} skills (N={})",
            breakdown.role_label,
            breakdown.entries.len(),
            breakdown.total_postings
        );
        for (rank, entry) in breakdown.entries.iter().enumerate() {
            println!(
                "{:>3}. {:<16} {:>4}  {:>5.1}%",
                rank + 1,
                entry.skill,
                entry.count,
                entry.percentage
            );
        }
    }

    if report.heatmap.skills.is_empty() {
        println!("\nSkill coverage heatmap: no data");
        return;
    }

    println!("\nSkill coverage heatmap (% of role postings)");
    println!(
        "{:<16} {}",
        "skill",
        report
            .heatmap
            .roles
            .iter()
            .map(|role| format!("{:>12}", role))
            .collect::<Vec<_>>()
            .join(" ")
    );
    for (column, skill) in report.heatmap.skills.iter().enumerate() {
        let cells = report
            .heatmap
            .rows
            .iter()
            .map(|row| format!("{:>12.1}", row[column]))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:<16} {}", skill, cells);
    }
}
