mod cli;
mod commands;

use skillscan::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
