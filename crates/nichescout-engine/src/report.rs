//! Report types: analyzer outcomes, the opportunity report, and the
//! exported summary.

use chrono::{DateTime, Utc};
use nichescout_core::{TrendSignal, YoutubeTrend};
use serde::{Deserialize, Serialize};

use crate::competition::{CompetitionLevel, CompetitionMetrics};
use crate::demand::{ActivityLevel, DemandMetrics};
use crate::pricing::PricingMetrics;
use crate::quality::QualityGapMetrics;
use crate::score::Recommendation;
use crate::timing::TimingMetrics;

/// Result of one analyzer over a listing collection.
///
/// Analyzers whose required filtered subset can be empty are total anyway:
/// they return `InsufficientData` instead of failing, and the scorer treats
/// the marker as the lowest-scoring case for that category.
///
/// Serialized untagged, so metrics appear inline and the marker appears as
/// `{"error": "..."}` in the report document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyzerOutcome<T> {
    Metrics(T),
    InsufficientData { error: String },
}

impl<T> AnalyzerOutcome<T> {
    /// Builds the insufficient-data marker with a human-readable reason.
    #[must_use]
    pub fn insufficient(reason: &str) -> Self {
        AnalyzerOutcome::InsufficientData {
            error: reason.to_string(),
        }
    }

    /// Returns the metrics if the analyzer had enough data.
    #[must_use]
    pub fn metrics(&self) -> Option<&T> {
        match self {
            AnalyzerOutcome::Metrics(m) => Some(m),
            AnalyzerOutcome::InsufficientData { .. } => None,
        }
    }
}

/// The complete analysis for one query: five analyzer outputs, the combined
/// score, and optional trend annotations.
///
/// Constructed once per pipeline run and immutable afterwards. Reports are
/// never merged; a new run produces a new report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityReport {
    pub query: String,
    pub total_books_analyzed: usize,
    pub analysis_date: DateTime<Utc>,
    pub competition: AnalyzerOutcome<CompetitionMetrics>,
    pub demand: DemandMetrics,
    pub quality_gaps: QualityGapMetrics,
    pub pricing: AnalyzerOutcome<PricingMetrics>,
    pub timing: TimingMetrics,
    /// Combined score in `[0, 100]`.
    pub opportunity_score: u8,
    /// Search-engine trend annotation, attached but never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_signal: Option<TrendSignal>,
    /// Video-platform trend annotation, attached but never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_trend: Option<YoutubeTrend>,
}

impl OpportunityReport {
    /// Recommendation tier for the report's score. Derived for display;
    /// never fed back into scoring.
    #[must_use]
    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_score(self.opportunity_score)
    }

    /// Attaches externally collected trend signals as read-only annotations.
    ///
    /// The opportunity score is left untouched: trend data is advisory and
    /// deliberately kept out of the scoring model.
    #[must_use]
    pub fn with_trends(
        mut self,
        trend_signal: Option<TrendSignal>,
        youtube_trend: Option<YoutubeTrend>,
    ) -> Self {
        self.trend_signal = trend_signal;
        self.youtube_trend = youtube_trend;
        self
    }
}

/// Action recommendation exported in the summary document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    Proceed,
    Reconsider,
}

/// Condensed decision summary derived from a full report, persisted next to
/// it for quick comparison across research sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchSummary {
    pub query: String,
    pub opportunity_score: u8,
    /// `None` when competition had insufficient data.
    pub competition_level: Option<CompetitionLevel>,
    pub market_activity: ActivityLevel,
    pub recommended_action: RecommendedAction,
    /// Missing formats worth exploring.
    pub key_opportunities: Vec<String>,
    /// `0.0` when pricing had insufficient data.
    pub avg_price: f64,
    pub analysis_date: DateTime<Utc>,
}

impl From<&OpportunityReport> for ResearchSummary {
    fn from(report: &OpportunityReport) -> Self {
        let recommended_action = if report.opportunity_score >= 50 {
            RecommendedAction::Proceed
        } else {
            RecommendedAction::Reconsider
        };

        ResearchSummary {
            query: report.query.clone(),
            opportunity_score: report.opportunity_score,
            competition_level: report.competition.metrics().map(|m| m.competition_level),
            market_activity: report.demand.market_activity_level,
            recommended_action,
            key_opportunities: report.quality_gaps.missing_formats.clone(),
            avg_price: report.pricing.metrics().map_or(0.0, |m| m.avg_price),
            analysis_date: report.analysis_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_metrics_accessor() {
        let outcome: AnalyzerOutcome<u32> = AnalyzerOutcome::Metrics(7);
        assert_eq!(outcome.metrics(), Some(&7));

        let marker: AnalyzerOutcome<u32> = AnalyzerOutcome::insufficient("nothing to analyze");
        assert_eq!(marker.metrics(), None);
    }

    #[test]
    fn insufficient_outcome_serializes_as_error_object() {
        let marker: AnalyzerOutcome<PricingMetrics> =
            AnalyzerOutcome::insufficient("no pricing data available");
        let json = serde_json::to_value(&marker).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "no pricing data available"})
        );
    }

    #[test]
    fn insufficient_outcome_deserializes_back_to_marker() {
        let json = r#"{"error": "no pricing data available"}"#;
        let outcome: AnalyzerOutcome<PricingMetrics> = serde_json::from_str(json).unwrap();
        assert!(outcome.metrics().is_none());
    }
}
