//! Pipeline orchestration: one query's listings in, one report out.

use chrono::{Datelike, Utc};
use nichescout_core::{BookListing, ScoringThresholds};

use crate::competition::analyze_competition;
use crate::demand::analyze_demand;
use crate::pricing::analyze_pricing;
use crate::quality::analyze_quality_gaps;
use crate::report::OpportunityReport;
use crate::score::opportunity_score;
use crate::timing::analyze_timing;

/// Runs every analyzer over `listings` and combines the results into an
/// [`OpportunityReport`].
///
/// Each analyzer is an independent pure function over the same immutable
/// slice; the order they run in does not affect the result. An empty
/// collection still yields a valid, low-scored report with the
/// insufficient-data markers set where applicable.
///
/// Trend signals are attached afterwards via
/// [`OpportunityReport::with_trends`], never here: the core score must not
/// depend on them.
#[must_use]
pub fn analyze_market(
    query: &str,
    listings: &[BookListing],
    thresholds: &ScoringThresholds,
) -> OpportunityReport {
    let analysis_date = Utc::now();
    let current_year = analysis_date.year();

    tracing::debug!(query, listings = listings.len(), "analyzing market");

    let competition = analyze_competition(listings, thresholds);
    let demand = analyze_demand(listings, query, thresholds);
    let quality_gaps = analyze_quality_gaps(listings, thresholds);
    let pricing = analyze_pricing(listings, thresholds);
    let timing = analyze_timing(listings, current_year, thresholds);

    let score = opportunity_score(&competition, &demand, &quality_gaps, &timing, thresholds);

    OpportunityReport {
        query: query.to_string(),
        total_books_analyzed: listings.len(),
        analysis_date,
        competition,
        demand,
        quality_gaps,
        pricing,
        timing,
        opportunity_score: score,
        trend_signal: None,
        youtube_trend: None,
    }
}
