//! Market-demand analysis over a listing collection.

use nichescout_core::{BookListing, ScoringThresholds};
use serde::{Deserialize, Serialize};

/// Market activity tier derived from average reviews per listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityLevel::High => write!(f, "high"),
            ActivityLevel::Medium => write!(f, "medium"),
            ActivityLevel::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandMetrics {
    /// Sum of `reviews_count` across all listings, sentinels included.
    pub total_market_reviews: u64,
    pub avg_reviews_per_listing: f64,
    /// Listing count, used as a proxy for search-result density.
    pub result_density: usize,
    /// Listings whose review count clears the active-listing threshold.
    pub active_listings: usize,
    pub market_activity_level: ActivityLevel,
    pub estimated_monthly_searches: f64,
}

/// Analyzes demand indicators for a query's listings.
///
/// Unlike competition, demand is always computable: an empty collection
/// yields zeros and a `low` activity level rather than a marker.
#[must_use]
pub fn analyze_demand(
    listings: &[BookListing],
    query: &str,
    thresholds: &ScoringThresholds,
) -> DemandMetrics {
    let total_market_reviews: u64 = listings.iter().map(|l| u64::from(l.reviews_count)).sum();
    let result_density = listings.len();

    #[allow(clippy::cast_precision_loss)]
    let avg_reviews_per_listing = if listings.is_empty() {
        0.0
    } else {
        total_market_reviews as f64 / result_density as f64
    };

    let active_listings = listings
        .iter()
        .filter(|l| l.reviews_count > thresholds.active_listing_reviews)
        .count();

    DemandMetrics {
        total_market_reviews,
        avg_reviews_per_listing,
        result_density,
        active_listings,
        market_activity_level: assess_activity(avg_reviews_per_listing, thresholds),
        estimated_monthly_searches: estimate_search_volume(query, result_density),
    }
}

fn assess_activity(avg_reviews_per_listing: f64, thresholds: &ScoringThresholds) -> ActivityLevel {
    if avg_reviews_per_listing > thresholds.high_activity_avg_reviews {
        ActivityLevel::High
    } else if avg_reviews_per_listing > thresholds.medium_activity_avg_reviews {
        ActivityLevel::Medium
    } else {
        ActivityLevel::Low
    }
}

/// Rough monthly-search estimate: result density scaled by 100, doubled for
/// single-word queries, or scaled by 1.5 for "how to" queries. The two
/// multipliers are mutually exclusive; the single-word check wins.
fn estimate_search_volume(query: &str, result_density: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let base = result_density as f64 * 100.0;

    if query.split_whitespace().count() == 1 {
        base * 2.0
    } else if query.to_lowercase().contains("how to") {
        base * 1.5
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_listing(reviews: u32) -> BookListing {
        BookListing {
            title: "A Book".to_string(),
            author: "Author".to_string(),
            reviews_count: reviews,
            rating: 4.0,
            price: 9.99,
            asin: "B000000000".to_string(),
            publication_year: Some(2023),
            extracted_at: Utc::now(),
        }
    }

    fn defaults() -> ScoringThresholds {
        ScoringThresholds::default()
    }

    #[test]
    fn empty_collection_yields_low_activity_and_zeros() {
        let metrics = analyze_demand(&[], "sourdough baking", &defaults());
        assert_eq!(metrics.total_market_reviews, 0);
        assert_eq!(metrics.avg_reviews_per_listing, 0.0);
        assert_eq!(metrics.result_density, 0);
        assert_eq!(metrics.active_listings, 0);
        assert_eq!(metrics.market_activity_level, ActivityLevel::Low);
        assert_eq!(metrics.estimated_monthly_searches, 0.0);
    }

    #[test]
    fn totals_include_sentinel_zero_reviews() {
        let listings = vec![make_listing(100), make_listing(0)];
        let metrics = analyze_demand(&listings, "sourdough baking", &defaults());
        assert_eq!(metrics.total_market_reviews, 100);
        assert_eq!(metrics.avg_reviews_per_listing, 50.0);
        assert_eq!(metrics.result_density, 2);
    }

    #[test]
    fn active_listings_require_more_than_fifty_reviews() {
        let listings = vec![make_listing(50), make_listing(51), make_listing(200)];
        let metrics = analyze_demand(&listings, "sourdough baking", &defaults());
        assert_eq!(metrics.active_listings, 2);
    }

    #[test]
    fn activity_high_above_fifty_average() {
        let listings = vec![make_listing(60), make_listing(60)];
        let metrics = analyze_demand(&listings, "sourdough baking", &defaults());
        assert_eq!(metrics.market_activity_level, ActivityLevel::High);
    }

    #[test]
    fn activity_medium_between_fifteen_and_fifty() {
        let listings = vec![make_listing(20), make_listing(20)];
        let metrics = analyze_demand(&listings, "sourdough baking", &defaults());
        assert_eq!(metrics.market_activity_level, ActivityLevel::Medium);
    }

    #[test]
    fn activity_low_at_exact_boundary() {
        // Exactly 15 average reviews is not medium.
        let listings = vec![make_listing(15)];
        let metrics = analyze_demand(&listings, "sourdough baking", &defaults());
        assert_eq!(metrics.market_activity_level, ActivityLevel::Low);
    }

    #[test]
    fn search_volume_doubles_for_single_word_query() {
        let listings = vec![make_listing(10); 3];
        let metrics = analyze_demand(&listings, "sourdough", &defaults());
        assert_eq!(metrics.estimated_monthly_searches, 600.0);
    }

    #[test]
    fn search_volume_scaled_for_how_to_query() {
        let listings = vec![make_listing(10); 3];
        let metrics = analyze_demand(&listings, "How To bake bread", &defaults());
        assert_eq!(metrics.estimated_monthly_searches, 450.0);
    }

    #[test]
    fn search_volume_unscaled_for_plain_multiword_query() {
        let listings = vec![make_listing(10); 4];
        let metrics = analyze_demand(&listings, "sourdough bread baking", &defaults());
        assert_eq!(metrics.estimated_monthly_searches, 400.0);
    }
}
