use crate::commands::{run_collect, run_report, CollectArgs, ReportArgs};
use clap::{Parser, Subcommand};
use skillscan::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "skillscan",
    about = "Collect job postings and analyze technology skill demand by role",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape postings for every job role and persist them as CSV
    Collect(CollectArgs),
    /// Analyze a collected CSV into demand tables and chart data (default)
    Report(ReportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()));

    match command {
        Command::Collect(args) => run_collect(args),
        Command::Report(args) => run_report(args),
    }
}
