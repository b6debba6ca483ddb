//! Shared data model and configuration for nichescout.
//!
//! Holds the normalized [`BookListing`] record that every analyzer consumes,
//! the externally collected trend signal types, the tuned scoring constants
//! in [`ScoringThresholds`], and env-based application configuration.

use thiserror::Error;

mod app_config;
mod config;
pub mod listing;
pub mod thresholds;
pub mod trend;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use listing::{BookListing, RawListing};
pub use thresholds::ScoringThresholds;
pub use trend::{InterestLevel, TrendSignal, YoutubeTrend};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read thresholds file {path}: {reason}")]
    ThresholdsFile { path: String, reason: String },
}
