//! Competitive-landscape analysis over a listing collection.

use nichescout_core::{BookListing, ScoringThresholds};
use serde::{Deserialize, Serialize};

use crate::report::AnalyzerOutcome;
use crate::stats::{mean, median};

/// Competition tier for a market. Tiers are evaluated strictly in the order
/// high, medium, low; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetitionLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompetitionLevel::High => write!(f, "high"),
            CompetitionLevel::Medium => write!(f, "medium"),
            CompetitionLevel::Low => write!(f, "low"),
        }
    }
}

/// One author with the number of valid listings attributed to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    pub author: String,
    pub listings: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitionMetrics {
    /// Listings with at least one review.
    pub total_competitors: usize,
    pub avg_reviews: f64,
    pub median_reviews: f64,
    pub max_reviews: u32,
    pub min_reviews: u32,
    /// Mean rating over competitors with a real rating; `0.0` if none have one.
    pub avg_rating: f64,
    /// Number of distinct author names among competitors.
    pub author_diversity: usize,
    /// Top five authors by listing count, ties broken by first appearance.
    pub dominant_authors: Vec<AuthorCount>,
    pub competition_level: CompetitionLevel,
}

/// Analyzes the competitive landscape for a query's listings.
///
/// Only listings with `reviews_count > 0` count as competitors; if none
/// qualify the insufficient-data marker is returned.
#[must_use]
pub fn analyze_competition(
    listings: &[BookListing],
    thresholds: &ScoringThresholds,
) -> AnalyzerOutcome<CompetitionMetrics> {
    let competitors: Vec<&BookListing> = listings.iter().filter(|l| l.has_reviews()).collect();
    if competitors.is_empty() {
        return AnalyzerOutcome::insufficient("no listings with review data");
    }

    let reviews: Vec<f64> = competitors
        .iter()
        .map(|l| f64::from(l.reviews_count))
        .collect();
    let ratings: Vec<f64> = competitors
        .iter()
        .filter(|l| l.has_rating())
        .map(|l| l.rating)
        .collect();

    let avg_reviews = mean(&reviews);
    let avg_rating = mean(&ratings);

    // Count listings per author in first-seen order so ties in the
    // dominant-author ranking resolve deterministically.
    let mut author_counts: Vec<AuthorCount> = Vec::new();
    for listing in &competitors {
        match author_counts
            .iter_mut()
            .find(|a| a.author == listing.author)
        {
            Some(entry) => entry.listings += 1,
            None => author_counts.push(AuthorCount {
                author: listing.author.clone(),
                listings: 1,
            }),
        }
    }
    let author_diversity = author_counts.len();

    let mut dominant_authors = author_counts;
    // Stable sort preserves first-seen order between equal counts.
    dominant_authors.sort_by(|a, b| b.listings.cmp(&a.listings));
    dominant_authors.truncate(5);

    AnalyzerOutcome::Metrics(CompetitionMetrics {
        total_competitors: competitors.len(),
        avg_reviews,
        median_reviews: median(&reviews),
        max_reviews: competitors.iter().map(|l| l.reviews_count).max().unwrap_or(0),
        min_reviews: competitors.iter().map(|l| l.reviews_count).min().unwrap_or(0),
        avg_rating,
        author_diversity,
        dominant_authors,
        competition_level: assess_level(avg_reviews, avg_rating, thresholds),
    })
}

/// First matching tier wins: high, then medium, then low.
fn assess_level(
    avg_reviews: f64,
    avg_rating: f64,
    thresholds: &ScoringThresholds,
) -> CompetitionLevel {
    if avg_reviews > thresholds.high_competition_reviews
        && avg_rating > thresholds.high_competition_rating
    {
        CompetitionLevel::High
    } else if avg_reviews > thresholds.medium_competition_reviews
        && avg_rating > thresholds.medium_competition_rating
    {
        CompetitionLevel::Medium
    } else {
        CompetitionLevel::Low
    }
}
