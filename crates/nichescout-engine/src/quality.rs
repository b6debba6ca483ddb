//! Quality-gap analysis: poorly served readers and unserved formats.

use nichescout_core::{BookListing, ScoringThresholds};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityGapMetrics {
    /// Listings rated below the improvable cutoff despite a meaningful
    /// review count. These are competitors a better book could displace.
    pub low_rated_opportunities: usize,
    /// Reference format words that appear in no title.
    pub missing_formats: Vec<String>,
    /// Title words so frequent they signal a crowded format.
    pub oversaturated_formats: Vec<String>,
}

/// Analyzes quality gaps across a query's listings.
///
/// Always computable: an empty collection yields zero improvable competitors,
/// every reference format reported missing, and no oversaturated words.
#[must_use]
pub fn analyze_quality_gaps(
    listings: &[BookListing],
    thresholds: &ScoringThresholds,
) -> QualityGapMetrics {
    // Sentinel ratings (0.0) count as improvable on purpose: an unrated
    // listing with real review volume is still a displacement target.
    let low_rated_opportunities = listings
        .iter()
        .filter(|l| {
            l.rating < thresholds.improvable_max_rating
                && l.reviews_count > thresholds.improvable_min_reviews
        })
        .count();

    // Word frequency over all titles, lower-cased and whitespace-tokenized,
    // in first-seen order for deterministic ranking.
    let mut word_counts: Vec<(String, usize)> = Vec::new();
    for listing in listings {
        for word in listing.title.to_lowercase().split_whitespace() {
            match word_counts.iter_mut().find(|(w, _)| w == word) {
                Some((_, count)) => *count += 1,
                None => word_counts.push((word.to_string(), 1)),
            }
        }
    }

    let missing_formats = thresholds
        .reference_formats
        .iter()
        .filter(|fmt| !word_counts.iter().any(|(w, _)| w == *fmt))
        .cloned()
        .collect();

    // Top five words overall, then keep only those crossing the
    // oversaturation cutoff relative to the listing count.
    #[allow(clippy::cast_precision_loss)]
    let cutoff = listings.len() as f64 * thresholds.oversaturation_fraction;
    let mut ranked = word_counts;
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let oversaturated_formats = ranked
        .into_iter()
        .take(5)
        .filter(|(_, count)| {
            #[allow(clippy::cast_precision_loss)]
            let count_f = *count as f64;
            count_f > cutoff
        })
        .map(|(word, _)| word)
        .collect();

    QualityGapMetrics {
        low_rated_opportunities,
        missing_formats,
        oversaturated_formats,
    }
}
