use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub collect: CollectConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let output_path =
            PathBuf::from(env::var("APP_OUTPUT_PATH").unwrap_or_else(|_| "wanted_jobs.csv".to_string()));
        let target_count = parse_count("APP_TARGET_COUNT", 100)?;
        let max_scroll_rounds = parse_count("APP_SCROLL_ROUNDS", 20)?;
        let load_timeout_secs = parse_count("APP_LOAD_TIMEOUT_SECS", 10)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            collect: CollectConfig {
                output_path,
                target_count,
                max_scroll_rounds,
                load_timeout: Duration::from_secs(load_timeout_secs as u64),
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Knobs for the sequential collection loop.
#[derive(Debug, Clone)]
pub struct CollectConfig {
    pub output_path: PathBuf,
    /// Successfully collected postings per role before the role is cut short.
    pub target_count: usize,
    /// Ceiling on scroll-to-bottom rounds while the listing keeps growing.
    pub max_scroll_rounds: usize,
    /// Bounded wait for a page's readiness marker.
    pub load_timeout: Duration,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("wanted_jobs.csv"),
            target_count: 100,
            max_scroll_rounds: 20,
            load_timeout: Duration::from_secs(10),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCount { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCount { key } => {
                write!(f, "{} must be a non-negative integer", key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn parse_count(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidCount { key }),
        Err(_) => Ok(default),
    }
}
