use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sentinel used when a text field cannot be recovered from a search result.
pub const UNKNOWN: &str = "Unknown";

/// One marketplace search-result entry, normalized for analysis.
///
/// Every field has a defined sentinel when extraction fails (`0`, `0.0`,
/// `"Unknown"`, or `None` for the year) so a listing is never dropped for
/// missing data. Which sentinels are excluded from which statistics is
/// decided per analyzer, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookListing {
    pub title: String,
    /// `"Unknown"` when no author text could be recovered.
    pub author: String,
    /// `0` when unknown.
    pub reviews_count: u32,
    /// Star rating in `[0.0, 5.0]`; `0.0` when unknown.
    pub rating: f64,
    /// List price; `0.0` when unknown. A `0.0` here means "no price data",
    /// never a real zero price, and must be excluded from price statistics.
    pub price: f64,
    /// Opaque marketplace key (ASIN); `"Unknown"` when absent.
    pub asin: String,
    /// Last `20\d\d` year-like token found in any date-ish text for the
    /// listing; `None` when no such token exists.
    pub publication_year: Option<i32>,
    pub extracted_at: DateTime<Utc>,
}

impl BookListing {
    /// Returns `true` if the listing carries real review data.
    #[must_use]
    pub fn has_reviews(&self) -> bool {
        self.reviews_count > 0
    }

    /// Returns `true` if the listing carries a real rating.
    #[must_use]
    pub fn has_rating(&self) -> bool {
        self.rating > 0.0
    }

    /// Returns `true` if the listing carries real price data.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.price > 0.0
    }

    /// Returns `true` if the listing's publication year is within
    /// `window_years` of `current_year` (or later).
    ///
    /// Listings with no extractable year are never recent.
    #[must_use]
    pub fn is_recent(&self, current_year: i32, window_years: i32) -> bool {
        self.publication_year
            .is_some_and(|year| year >= current_year - window_years)
    }
}

/// Loosely structured text fragments sliced out of one search result, before
/// normalization. Produced by the scraper; consumed by the engine's
/// extraction normalizer. Any fragment may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawListing {
    pub title_text: Option<String>,
    pub author_text: Option<String>,
    /// Review-count text, e.g. `"1,234"`.
    pub reviews_text: Option<String>,
    /// Rating text, e.g. `"4.5 out of 5 stars"`.
    pub rating_text: Option<String>,
    /// Price text, possibly currency-prefixed, e.g. `"$12.99"`.
    pub price_text: Option<String>,
    pub asin: Option<String>,
    /// Free text searched for a publication year.
    pub date_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_listing(reviews: u32, rating: f64, price: f64, year: Option<i32>) -> BookListing {
        BookListing {
            title: "Sourdough for Beginners".to_string(),
            author: "Jane Baker".to_string(),
            reviews_count: reviews,
            rating,
            price,
            asin: "B0TEST1234".to_string(),
            publication_year: year,
            extracted_at: Utc::now(),
        }
    }

    #[test]
    fn has_reviews_false_for_sentinel_zero() {
        assert!(!make_listing(0, 4.5, 9.99, Some(2024)).has_reviews());
    }

    #[test]
    fn has_reviews_true_for_positive_count() {
        assert!(make_listing(12, 4.5, 9.99, Some(2024)).has_reviews());
    }

    #[test]
    fn has_rating_false_for_sentinel_zero() {
        assert!(!make_listing(12, 0.0, 9.99, Some(2024)).has_rating());
    }

    #[test]
    fn has_price_false_for_sentinel_zero() {
        assert!(!make_listing(12, 4.5, 0.0, Some(2024)).has_price());
    }

    #[test]
    fn is_recent_true_at_exact_window_boundary() {
        let listing = make_listing(1, 4.0, 5.0, Some(2024));
        assert!(listing.is_recent(2026, 2));
    }

    #[test]
    fn is_recent_false_one_year_before_window() {
        let listing = make_listing(1, 4.0, 5.0, Some(2023));
        assert!(!listing.is_recent(2026, 2));
    }

    #[test]
    fn is_recent_false_without_publication_year() {
        let listing = make_listing(1, 4.0, 5.0, None);
        assert!(!listing.is_recent(2026, 2));
    }

    #[test]
    fn serde_roundtrip_preserves_numeric_fields() {
        let listing = make_listing(347, 4.3, 12.99, Some(2025));
        let json = serde_json::to_string(&listing).expect("serialization failed");
        let decoded: BookListing = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(decoded.reviews_count, 347);
        assert_eq!(decoded.rating, 4.3);
        assert_eq!(decoded.price, 12.99);
        assert_eq!(decoded.publication_year, Some(2025));
    }
}
