//! Market-timing analysis from publication-year recency.

use nichescout_core::{BookListing, ScoringThresholds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishingTrend {
    Growing,
    Stable,
}

impl std::fmt::Display for PublishingTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PublishingTrend::Growing => write!(f, "growing"),
            PublishingTrend::Stable => write!(f, "stable"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityTiming {
    /// The market is not crowded with recent releases.
    Good,
    /// Recent releases dominate; entering now means fighting fresh titles.
    Competitive,
}

impl std::fmt::Display for OpportunityTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpportunityTiming::Good => write!(f, "good"),
            OpportunityTiming::Competitive => write!(f, "competitive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingMetrics {
    /// Listings published within the recent window.
    pub recent_publications: usize,
    /// Fraction of listings that are recent; `0.0` for an empty collection.
    pub market_freshness: f64,
    pub publishing_trend: PublishingTrend,
    pub opportunity_timing: OpportunityTiming,
}

/// Analyzes publication recency for a query's listings.
///
/// `current_year` is passed in rather than read from the clock so results
/// are reproducible in tests and across a long-running batch.
#[must_use]
pub fn analyze_timing(
    listings: &[BookListing],
    current_year: i32,
    thresholds: &ScoringThresholds,
) -> TimingMetrics {
    let recent_publications = listings
        .iter()
        .filter(|l| l.is_recent(current_year, thresholds.recent_window_years))
        .count();

    #[allow(clippy::cast_precision_loss)]
    let market_freshness = if listings.is_empty() {
        0.0
    } else {
        recent_publications as f64 / listings.len() as f64
    };

    let publishing_trend = if market_freshness > thresholds.growing_trend_fraction {
        PublishingTrend::Growing
    } else {
        PublishingTrend::Stable
    };

    let opportunity_timing = if market_freshness < thresholds.good_timing_fraction {
        OpportunityTiming::Good
    } else {
        OpportunityTiming::Competitive
    };

    TimingMetrics {
        recent_publications,
        market_freshness,
        publishing_trend,
        opportunity_timing,
    }
}
