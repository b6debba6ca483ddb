use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration, built from environment variables.
///
/// The engine itself takes no configuration beyond [`crate::ScoringThresholds`];
/// everything here belongs to the I/O collaborators (scraper, trends, CLI).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory where the CLI writes result/analysis/summary JSON files.
    pub output_dir: PathBuf,
    /// Optional YAML file overriding the default scoring thresholds.
    pub thresholds_path: Option<PathBuf>,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    /// Hard cap on search result pages fetched per query.
    pub scraper_max_pages: usize,
    pub scraper_inter_request_delay_ms: u64,
    pub scraper_max_retries: u32,
    pub scraper_retry_backoff_base_secs: u64,
}
