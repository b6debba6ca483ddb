//! Opportunity-scoring engine for nichescout.
//!
//! Takes a normalized collection of [`nichescout_core::BookListing`] records
//! for one query and derives competition, demand, quality-gap, pricing, and
//! timing metrics, then combines them into a bounded 0–100 opportunity score
//! with a recommendation tier. Externally collected trend signals are
//! attached to the report as read-only annotations, never scored.
//!
//! Everything here is pure and synchronous: analyzers are independent
//! functions over the same immutable slice, safe to run concurrently across
//! queries with no shared state. No function in this crate performs I/O or
//! returns an error: missing data degrades to sentinel defaults and empty
//! filtered subsets become explicit insufficient-data markers.

pub mod competition;
pub mod demand;
pub mod extract;
pub mod keywords;
pub mod pipeline;
pub mod pricing;
pub mod quality;
pub mod report;
pub mod score;
pub mod timing;

mod stats;

pub use competition::{analyze_competition, CompetitionLevel, CompetitionMetrics};
pub use demand::{analyze_demand, ActivityLevel, DemandMetrics};
pub use extract::normalize_listing;
pub use keywords::suggest_keywords;
pub use pipeline::analyze_market;
pub use pricing::{analyze_pricing, PricingMetrics, PricingStrategy};
pub use quality::{analyze_quality_gaps, QualityGapMetrics};
pub use report::{AnalyzerOutcome, OpportunityReport, RecommendedAction, ResearchSummary};
pub use score::{opportunity_score, Recommendation};
pub use timing::{analyze_timing, OpportunityTiming, PublishingTrend, TimingMetrics};
