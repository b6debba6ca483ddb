//! Tuned decision constants for the opportunity analyzers.
//!
//! Every cutoff in the analyzers was chosen empirically against live book
//! markets, so none of them are hard-coded at the use site: they all live
//! here, with [`Default`] carrying the tuned values and an optional YAML
//! override for experimentation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Decision constants consumed by the analyzers and the opportunity scorer.
///
/// Missing keys in a YAML override fall back to the defaults, so a file can
/// tune a single constant without restating the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    /// Mean reviews above which (with rating) competition is `high`.
    pub high_competition_reviews: f64,
    /// Mean rating above which (with reviews) competition is `high`.
    pub high_competition_rating: f64,
    /// Mean reviews above which (with rating) competition is `medium`.
    pub medium_competition_reviews: f64,
    /// Mean rating above which (with reviews) competition is `medium`.
    pub medium_competition_rating: f64,
    /// Review count above which a listing counts as "active" for demand.
    pub active_listing_reviews: u32,
    /// Average reviews per listing above which market activity is `high`.
    pub high_activity_avg_reviews: f64,
    /// Average reviews per listing above which market activity is `medium`.
    pub medium_activity_avg_reviews: f64,
    /// Rating below which a well-reviewed listing counts as improvable.
    pub improvable_max_rating: f64,
    /// Review count above which a low-rated listing counts as improvable.
    pub improvable_min_reviews: u32,
    /// Fraction of the listing count above which a title word counts as an
    /// oversaturated format.
    pub oversaturation_fraction: f64,
    /// Improvable-competitor count above which the scorer grants the
    /// quality-gap bonus.
    pub improvable_bonus_count: usize,
    /// Format words whose absence from all titles is reported as a gap.
    pub reference_formats: Vec<String>,
    /// Minimum distance between adjacent sorted prices to report a gap.
    pub price_gap_min: f64,
    /// Median price below which premium pricing is suggested.
    pub premium_median_price: f64,
    /// Median price above which budget pricing is suggested.
    pub budget_median_price: f64,
    /// A listing is recent if its year is within this many years of now.
    pub recent_window_years: i32,
    /// Recent fraction above which the publishing trend is `growing`.
    pub growing_trend_fraction: f64,
    /// Recent fraction below which opportunity timing is `good`.
    pub good_timing_fraction: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            high_competition_reviews: 500.0,
            high_competition_rating: 4.3,
            medium_competition_reviews: 100.0,
            medium_competition_rating: 4.0,
            active_listing_reviews: 50,
            high_activity_avg_reviews: 50.0,
            medium_activity_avg_reviews: 15.0,
            improvable_max_rating: 4.0,
            improvable_min_reviews: 20,
            oversaturation_fraction: 0.3,
            improvable_bonus_count: 3,
            reference_formats: ["guide", "handbook", "workbook", "journal", "planner"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            price_gap_min: 1.0,
            premium_median_price: 3.0,
            budget_median_price: 8.0,
            recent_window_years: 2,
            growing_trend_fraction: 0.4,
            good_timing_fraction: 0.6,
        }
    }
}

impl ScoringThresholds {
    /// Loads thresholds from a YAML file, filling unspecified keys with the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ThresholdsFile`] if the file cannot be read or
    /// does not parse as a thresholds mapping.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::ThresholdsFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_yaml::from_str(&raw).map_err(|e| ConfigError::ThresholdsFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_constants() {
        let t = ScoringThresholds::default();
        assert_eq!(t.high_competition_reviews, 500.0);
        assert_eq!(t.high_competition_rating, 4.3);
        assert_eq!(t.medium_competition_reviews, 100.0);
        assert_eq!(t.medium_competition_rating, 4.0);
        assert_eq!(t.active_listing_reviews, 50);
        assert_eq!(t.oversaturation_fraction, 0.3);
        assert_eq!(t.improvable_bonus_count, 3);
        assert_eq!(t.recent_window_years, 2);
    }

    #[test]
    fn default_reference_formats_are_the_five_known_words() {
        let t = ScoringThresholds::default();
        assert_eq!(
            t.reference_formats,
            vec!["guide", "handbook", "workbook", "journal", "planner"]
        );
    }

    #[test]
    fn partial_yaml_override_keeps_other_defaults() {
        let t: ScoringThresholds =
            serde_yaml::from_str("oversaturation_fraction: 0.5\n").unwrap();
        assert_eq!(t.oversaturation_fraction, 0.5);
        assert_eq!(t.high_competition_reviews, 500.0);
        assert_eq!(t.improvable_bonus_count, 3);
    }

    #[test]
    fn empty_yaml_mapping_yields_defaults() {
        let t: ScoringThresholds = serde_yaml::from_str("{}").unwrap();
        assert_eq!(t, ScoringThresholds::default());
    }

    #[test]
    fn from_yaml_file_missing_path_is_typed_error() {
        let err = ScoringThresholds::from_yaml_file(Path::new("/nonexistent/thresholds.yaml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdsFile { .. }));
    }
}
