use crate::analysis::viz::VizError;
use crate::collect::BrowserError;
use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Browser(BrowserError),
    Dataset(DatasetError),
    Viz(VizError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Browser(err) => write!(f, "page session error: {}", err),
            AppError::Dataset(err) => write!(f, "dataset error: {}", err),
            AppError::Viz(err) => write!(f, "visualization export error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Browser(err) => Some(err),
            AppError::Dataset(err) => Some(err),
            AppError::Viz(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<BrowserError> for AppError {
    fn from(value: BrowserError) -> Self {
        Self::Browser(value)
    }
}

impl From<DatasetError> for AppError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value)
    }
}

impl From<VizError> for AppError {
    fn from(value: VizError) -> Self {
        Self::Viz(value)
    }
}
