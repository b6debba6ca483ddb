//! Command handlers for the CLI.
//!
//! These are called from `main` after config and logging are established.
//! Handlers persist their outputs as pretty-printed JSON under the configured
//! output directory so later commands can pick up where earlier ones left off.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use serde::Deserialize;

use crate::render;
use nichescout_core::{AppConfig, BookListing, ScoringThresholds, TrendSignal, YoutubeTrend};
use nichescout_engine::{
    analyze_market, normalize_listing, suggest_keywords, OpportunityReport, ResearchSummary,
};
use nichescout_scraper::{AmazonSearchClient, DEFAULT_BASE_URL};
use nichescout_trends::{
    CollectedTrends, TrendsClient, DEFAULT_GOOGLE_BASE_URL, DEFAULT_YOUTUBE_BASE_URL,
};

const RESULTS_FILE: &str = "market_results.json";
const ANALYSIS_FILE: &str = "market_analysis.json";
const SUMMARY_FILE: &str = "market_summary.json";
const TRENDS_FILE: &str = "trends_analysis.json";

/// Trend signals as persisted by the `trends` command and consumed by
/// `report`. Either side may be missing when its source failed.
#[derive(Debug, Default, serde::Serialize, Deserialize)]
struct TrendsDocument {
    #[serde(default)]
    google_trends: Option<TrendSignal>,
    #[serde(default)]
    youtube_trends: Option<YoutubeTrend>,
}

impl From<CollectedTrends> for TrendsDocument {
    fn from(trends: CollectedTrends) -> Self {
        TrendsDocument {
            google_trends: trends.search,
            youtube_trends: trends.youtube,
        }
    }
}

/// Scrapes listings for `query`, analyzes the market, attaches best-effort
/// trend signals, and persists results, analysis, and summary.
pub(crate) async fn run_search(
    config: &AppConfig,
    query: &str,
    max_results: usize,
) -> anyhow::Result<()> {
    let thresholds = load_thresholds(config)?;
    let client = build_search_client(config)?;

    tracing::info!(query, max_results, "searching marketplace listings");
    let raw = client
        .search(
            DEFAULT_BASE_URL,
            query,
            max_results,
            config.scraper_max_pages,
            config.scraper_inter_request_delay_ms,
        )
        .await
        .with_context(|| format!("search failed for query '{query}'"))?;

    let extracted_at = Utc::now();
    let listings: Vec<BookListing> = raw
        .iter()
        .map(|r| normalize_listing(r, extracted_at))
        .collect();
    tracing::info!(query, listings = listings.len(), "collected listings");

    write_json(config, RESULTS_FILE, &listings)?;

    let report = analyze_market(query, &listings, &thresholds);
    let trends = collect_trends_best_effort(config, query).await;
    let report = report.with_trends(trends.search, trends.youtube);

    persist_report(config, &report)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    print_keyword_suggestions(&listings);
    Ok(())
}

/// Re-runs the analysis over listings persisted by a previous `search`.
pub(crate) fn run_analyze(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let thresholds = load_thresholds(config)?;
    let results_path = config.output_dir.join(RESULTS_FILE);
    let body = fs::read_to_string(&results_path).with_context(|| {
        format!(
            "no market results found at {}; run search first",
            results_path.display()
        )
    })?;
    let listings: Vec<BookListing> =
        serde_json::from_str(&body).context("malformed market results file")?;

    let report = analyze_market(query, &listings, &thresholds);
    persist_report(config, &report)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    print_keyword_suggestions(&listings);
    Ok(())
}

/// Collects trend signals for `query`, persists them, and prints them.
pub(crate) async fn run_trends(config: &AppConfig, query: &str) -> anyhow::Result<()> {
    let trends = collect_trends_best_effort(config, query).await;
    let document = TrendsDocument::from(trends);

    write_json(config, TRENDS_FILE, &document)?;
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

/// Renders the text report for a persisted analysis, optionally merged with
/// persisted trend signals, and refreshes the summary file.
pub(crate) fn run_report(
    config: &AppConfig,
    analysis_path: &Path,
    trends_path: Option<&Path>,
) -> anyhow::Result<()> {
    let body = fs::read_to_string(analysis_path)
        .with_context(|| format!("failed to read analysis file {}", analysis_path.display()))?;
    let report: OpportunityReport =
        serde_json::from_str(&body).context("malformed market analysis file")?;

    let report = match trends_path {
        Some(path) => {
            let trends_body = fs::read_to_string(path)
                .with_context(|| format!("failed to read trends file {}", path.display()))?;
            let trends: TrendsDocument =
                serde_json::from_str(&trends_body).context("malformed trends file")?;
            report.with_trends(trends.google_trends, trends.youtube_trends)
        }
        None => report,
    };

    println!("{}", render::render_report(&report));

    let summary = ResearchSummary::from(&report);
    write_json(config, SUMMARY_FILE, &summary)?;
    Ok(())
}

/// Collects trend signals without failing the run; missing sources come back
/// as `None` and are logged inside the collector.
async fn collect_trends_best_effort(config: &AppConfig, query: &str) -> CollectedTrends {
    let client = match TrendsClient::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
    ) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!(error = %e, "could not build trends client, skipping trend collection");
            return CollectedTrends::default();
        }
    };
    client
        .collect(DEFAULT_GOOGLE_BASE_URL, DEFAULT_YOUTUBE_BASE_URL, query)
        .await
}

fn build_search_client(config: &AppConfig) -> anyhow::Result<AmazonSearchClient> {
    AmazonSearchClient::new(
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
        config.scraper_max_retries,
        config.scraper_retry_backoff_base_secs,
    )
    .context("failed to build search client")
}

fn load_thresholds(config: &AppConfig) -> anyhow::Result<ScoringThresholds> {
    match &config.thresholds_path {
        Some(path) => ScoringThresholds::from_yaml_file(path)
            .with_context(|| format!("failed to load thresholds from {}", path.display())),
        None => Ok(ScoringThresholds::default()),
    }
}

fn persist_report(config: &AppConfig, report: &OpportunityReport) -> anyhow::Result<()> {
    write_json(config, ANALYSIS_FILE, report)?;
    let summary = ResearchSummary::from(report);
    write_json(config, SUMMARY_FILE, &summary)
}

fn write_json<T: serde::Serialize>(
    config: &AppConfig,
    file_name: &str,
    value: &T,
) -> anyhow::Result<()> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    let path: PathBuf = config.output_dir.join(file_name);
    let body = serde_json::to_string_pretty(value)?;
    fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote output file");
    Ok(())
}

/// Prints niche keywords mined from the better-rated titles in the batch.
fn print_keyword_suggestions(listings: &[BookListing]) {
    let successful_titles: Vec<String> = listings
        .iter()
        .filter(|l| l.rating >= 4.0)
        .map(|l| l.title.clone())
        .collect();
    let suggestions = suggest_keywords(&successful_titles);
    if suggestions.is_empty() {
        return;
    }

    println!("\nKeyword suggestions from well-rated titles:");
    for suggestion in suggestions.iter().take(10) {
        println!("  {} ({})", suggestion.keyword, suggestion.count);
    }
}
