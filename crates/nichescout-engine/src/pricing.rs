//! Pricing analysis: distribution, gaps, and a strategy suggestion.

use nichescout_core::{BookListing, ScoringThresholds};
use serde::{Deserialize, Serialize};

use crate::report::AnalyzerOutcome;
use crate::stats::{mean, median};

/// Fixed price-bucket edges, in the marketplace currency.
const BUCKET_LOW: f64 = 3.0;
const BUCKET_MID: f64 = 6.0;
const BUCKET_HIGH: f64 = 10.0;

/// Suggested pricing posture, derived from the median market price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingStrategy {
    /// The market is priced so low there is room above it.
    PremiumOpportunity,
    /// The market is priced high enough to undercut.
    BudgetOpportunity,
    CompetitivePricing,
}

impl std::fmt::Display for PricingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PricingStrategy::PremiumOpportunity => write!(f, "premium opportunity"),
            PricingStrategy::BudgetOpportunity => write!(f, "budget opportunity"),
            PricingStrategy::CompetitivePricing => write!(f, "competitive pricing"),
        }
    }
}

/// Listing counts per fixed price band. The counts always sum to the number
/// of listings with real price data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBuckets {
    pub under_3: usize,
    #[serde(rename = "3_to_6")]
    pub from_3_to_6: usize,
    #[serde(rename = "6_to_10")]
    pub from_6_to_10: usize,
    pub over_10: usize,
}

/// A hole in the sorted price list wide enough to position a new title in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceGap {
    pub gap_start: f64,
    pub gap_end: f64,
    pub gap_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingMetrics {
    pub avg_price: f64,
    pub median_price: f64,
    pub price_range_distribution: PriceBuckets,
    pub price_gaps: Vec<PriceGap>,
    pub pricing_strategy: PricingStrategy,
}

/// Analyzes pricing for a query's listings.
///
/// Sentinel prices (`0.0`) mean "no data" and are excluded; if no listing
/// carries real price data the insufficient-data marker is returned.
#[must_use]
pub fn analyze_pricing(
    listings: &[BookListing],
    thresholds: &ScoringThresholds,
) -> AnalyzerOutcome<PricingMetrics> {
    let mut prices: Vec<f64> = listings
        .iter()
        .filter(|l| l.has_price())
        .map(|l| l.price)
        .collect();
    if prices.is_empty() {
        return AnalyzerOutcome::insufficient("no pricing data available");
    }
    prices.sort_by(f64::total_cmp);

    let median_price = median(&prices);

    AnalyzerOutcome::Metrics(PricingMetrics {
        avg_price: mean(&prices),
        median_price,
        price_range_distribution: bucket_prices(&prices),
        price_gaps: find_price_gaps(&prices, thresholds.price_gap_min),
        pricing_strategy: suggest_strategy(median_price, thresholds),
    })
}

fn bucket_prices(prices: &[f64]) -> PriceBuckets {
    PriceBuckets {
        under_3: prices.iter().filter(|&&p| p < BUCKET_LOW).count(),
        from_3_to_6: prices
            .iter()
            .filter(|&&p| (BUCKET_LOW..BUCKET_MID).contains(&p))
            .count(),
        from_6_to_10: prices
            .iter()
            .filter(|&&p| (BUCKET_MID..BUCKET_HIGH).contains(&p))
            .count(),
        over_10: prices.iter().filter(|&&p| p >= BUCKET_HIGH).count(),
    }
}

/// Reports every adjacent pair in the sorted price list at least
/// `min_gap` apart. Idempotent on sorted input; identical prices
/// produce no gaps.
fn find_price_gaps(sorted_prices: &[f64], min_gap: f64) -> Vec<PriceGap> {
    sorted_prices
        .windows(2)
        .filter_map(|pair| {
            let gap = pair[1] - pair[0];
            (gap >= min_gap).then(|| PriceGap {
                gap_start: pair[0],
                gap_end: pair[1],
                gap_size: gap,
            })
        })
        .collect()
}

fn suggest_strategy(median_price: f64, thresholds: &ScoringThresholds) -> PricingStrategy {
    if median_price < thresholds.premium_median_price {
        PricingStrategy::PremiumOpportunity
    } else if median_price > thresholds.budget_median_price {
        PricingStrategy::BudgetOpportunity
    } else {
        PricingStrategy::CompetitivePricing
    }
}
