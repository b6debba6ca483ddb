//! Opportunity scoring: a deterministic weighted sum over analyzer outputs.

use nichescout_core::ScoringThresholds;
use serde::{Deserialize, Serialize};

use crate::competition::{CompetitionLevel, CompetitionMetrics};
use crate::demand::{ActivityLevel, DemandMetrics};
use crate::quality::QualityGapMetrics;
use crate::report::AnalyzerOutcome;
use crate::timing::{OpportunityTiming, TimingMetrics};

/// Upper bound on the opportunity score.
pub const MAX_SCORE: u32 = 100;

// Category weights. The sum of the maxima is 88, so the cap is defensive
// headroom rather than something routinely hit.
const COMPETITION_LOW: u32 = 25;
const COMPETITION_MEDIUM: u32 = 15;
const COMPETITION_HIGH_OR_UNKNOWN: u32 = 5;
const DEMAND_HIGH: u32 = 35;
const DEMAND_MEDIUM: u32 = 25;
const DEMAND_LOW: u32 = 10;
const QUALITY_IMPROVABLE_BONUS: u32 = 15;
const QUALITY_MISSING_FORMAT_BONUS: u32 = 5;
const TIMING_GOOD: u32 = 8;
const TIMING_COMPETITIVE: u32 = 4;

/// Recommendation tier derived from the final score. Reporting only; the
/// tier never feeds back into scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Excellent,
    Good,
    Moderate,
    Low,
}

impl Recommendation {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            70.. => Recommendation::Excellent,
            50..=69 => Recommendation::Good,
            30..=49 => Recommendation::Moderate,
            _ => Recommendation::Low,
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Excellent => write!(f, "excellent"),
            Recommendation::Good => write!(f, "good"),
            Recommendation::Moderate => write!(f, "moderate"),
            Recommendation::Low => write!(f, "low"),
        }
    }
}

/// Combines the analyzer outputs into one bounded score in `[0, 100]`.
///
/// Contributions are summed in fixed order with no early exit. An
/// insufficient-data marker scores as the lowest case for its category, so
/// a thin market still yields a valid, lower-scored report.
#[must_use]
pub fn opportunity_score(
    competition: &AnalyzerOutcome<CompetitionMetrics>,
    demand: &DemandMetrics,
    quality: &QualityGapMetrics,
    timing: &TimingMetrics,
    thresholds: &ScoringThresholds,
) -> u8 {
    let mut score = 0u32;

    score += match competition.metrics().map(|m| m.competition_level) {
        Some(CompetitionLevel::Low) => COMPETITION_LOW,
        Some(CompetitionLevel::Medium) => COMPETITION_MEDIUM,
        Some(CompetitionLevel::High) | None => COMPETITION_HIGH_OR_UNKNOWN,
    };

    score += match demand.market_activity_level {
        ActivityLevel::High => DEMAND_HIGH,
        ActivityLevel::Medium => DEMAND_MEDIUM,
        ActivityLevel::Low => DEMAND_LOW,
    };

    // Both quality bonuses apply independently.
    if quality.low_rated_opportunities > thresholds.improvable_bonus_count {
        score += QUALITY_IMPROVABLE_BONUS;
    }
    if !quality.missing_formats.is_empty() {
        score += QUALITY_MISSING_FORMAT_BONUS;
    }

    score += match timing.opportunity_timing {
        OpportunityTiming::Good => TIMING_GOOD,
        OpportunityTiming::Competitive => TIMING_COMPETITIVE,
    };

    u8::try_from(score.min(MAX_SCORE)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::PublishingTrend;

    fn defaults() -> ScoringThresholds {
        ScoringThresholds::default()
    }

    fn competition_with(level: CompetitionLevel) -> AnalyzerOutcome<CompetitionMetrics> {
        AnalyzerOutcome::Metrics(CompetitionMetrics {
            total_competitors: 10,
            avg_reviews: 200.0,
            median_reviews: 150.0,
            max_reviews: 600,
            min_reviews: 5,
            avg_rating: 4.2,
            author_diversity: 8,
            dominant_authors: Vec::new(),
            competition_level: level,
        })
    }

    fn demand_with(level: ActivityLevel) -> DemandMetrics {
        DemandMetrics {
            total_market_reviews: 1000,
            avg_reviews_per_listing: 40.0,
            result_density: 25,
            active_listings: 6,
            market_activity_level: level,
            estimated_monthly_searches: 2500.0,
        }
    }

    fn quality_with(improvable: usize, missing: &[&str]) -> QualityGapMetrics {
        QualityGapMetrics {
            low_rated_opportunities: improvable,
            missing_formats: missing.iter().map(ToString::to_string).collect(),
            oversaturated_formats: Vec::new(),
        }
    }

    fn timing_with(timing: OpportunityTiming) -> TimingMetrics {
        TimingMetrics {
            recent_publications: 3,
            market_freshness: 0.3,
            publishing_trend: PublishingTrend::Stable,
            opportunity_timing: timing,
        }
    }

    #[test]
    fn uncontested_quiet_market_scores_baseline() {
        let score = opportunity_score(
            &competition_with(CompetitionLevel::Low),
            &demand_with(ActivityLevel::Low),
            &quality_with(0, &[]),
            &timing_with(OpportunityTiming::Good),
            &defaults(),
        );
        assert_eq!(score, 25 + 10 + 8);
    }

    #[test]
    fn best_case_score_is_bounded() {
        let score = opportunity_score(
            &competition_with(CompetitionLevel::Low),
            &demand_with(ActivityLevel::High),
            &quality_with(10, &["journal"]),
            &timing_with(OpportunityTiming::Good),
            &defaults(),
        );
        assert_eq!(score, 25 + 35 + 15 + 5 + 8);
        assert!(u32::from(score) <= MAX_SCORE);
    }

    #[test]
    fn high_competition_scores_minimum_category_points() {
        let score = opportunity_score(
            &competition_with(CompetitionLevel::High),
            &demand_with(ActivityLevel::Low),
            &quality_with(0, &[]),
            &timing_with(OpportunityTiming::Competitive),
            &defaults(),
        );
        assert_eq!(score, 5 + 10 + 4);
    }

    #[test]
    fn insufficient_competition_scores_like_high() {
        let score = opportunity_score(
            &AnalyzerOutcome::insufficient("no listings with review data"),
            &demand_with(ActivityLevel::Medium),
            &quality_with(0, &[]),
            &timing_with(OpportunityTiming::Good),
            &defaults(),
        );
        assert_eq!(score, 5 + 25 + 8);
    }

    #[test]
    fn improvable_bonus_requires_strictly_more_than_three() {
        let at_threshold = opportunity_score(
            &competition_with(CompetitionLevel::Medium),
            &demand_with(ActivityLevel::Low),
            &quality_with(3, &[]),
            &timing_with(OpportunityTiming::Competitive),
            &defaults(),
        );
        let above_threshold = opportunity_score(
            &competition_with(CompetitionLevel::Medium),
            &demand_with(ActivityLevel::Low),
            &quality_with(4, &[]),
            &timing_with(OpportunityTiming::Competitive),
            &defaults(),
        );
        assert_eq!(at_threshold, 15 + 10 + 4);
        assert_eq!(above_threshold, 15 + 10 + 15 + 4);
    }

    #[test]
    fn quality_bonuses_stack_independently() {
        let score = opportunity_score(
            &competition_with(CompetitionLevel::Medium),
            &demand_with(ActivityLevel::Low),
            &quality_with(4, &["planner"]),
            &timing_with(OpportunityTiming::Competitive),
            &defaults(),
        );
        assert_eq!(score, 15 + 10 + 15 + 5 + 4);
    }

    #[test]
    fn recommendation_tiers_at_boundaries() {
        assert_eq!(Recommendation::from_score(70), Recommendation::Excellent);
        assert_eq!(Recommendation::from_score(69), Recommendation::Good);
        assert_eq!(Recommendation::from_score(50), Recommendation::Good);
        assert_eq!(Recommendation::from_score(49), Recommendation::Moderate);
        assert_eq!(Recommendation::from_score(30), Recommendation::Moderate);
        assert_eq!(Recommendation::from_score(29), Recommendation::Low);
        assert_eq!(Recommendation::from_score(0), Recommendation::Low);
    }
}
