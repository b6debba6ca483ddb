use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

#[derive(Debug, Parser)]
#[command(name = "nichescout")]
#[command(about = "Book market opportunity research")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape marketplace listings for a query, analyze them, and persist
    /// the results
    Search {
        query: String,

        /// Maximum number of listings to collect
        #[arg(long, default_value_t = 30)]
        max_results: usize,
    },
    /// Re-run the analysis over previously persisted listings
    Analyze { query: String },
    /// Collect trend signals for a query and print them
    Trends { query: String },
    /// Render a text report from a persisted analysis file
    Report {
        /// Path to a persisted market analysis JSON file
        analysis_path: PathBuf,

        /// Optional path to a persisted trends JSON file
        trends_path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = nichescout_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Search { query, max_results } => {
            commands::run_search(&config, &query, max_results).await
        }
        Commands::Analyze { query } => commands::run_analyze(&config, &query),
        Commands::Trends { query } => commands::run_trends(&config, &query).await,
        Commands::Report {
            analysis_path,
            trends_path,
        } => commands::run_report(&config, &analysis_path, trends_path.as_deref()),
    }
}
