//! Extraction normalizer: loosely structured listing fragments to
//! [`BookListing`] records.
//!
//! Every function here is total. Unextractable fields degrade to sentinel
//! defaults (`0`, `0.0`, `"Unknown"`, `None`) so the pipeline always produces
//! a record and no error crosses this boundary.

use chrono::{DateTime, Utc};
use nichescout_core::listing::UNKNOWN;
use nichescout_core::{BookListing, RawListing};
use regex::Regex;

/// Builds one [`BookListing`] from scraped text fragments.
///
/// Missing or unparseable fragments yield the record's sentinel defaults;
/// a listing is never rejected here.
#[must_use]
pub fn normalize_listing(raw: &RawListing, extracted_at: DateTime<Utc>) -> BookListing {
    let title = text_or_unknown(raw.title_text.as_deref());
    let author = text_or_unknown(raw.author_text.as_deref());
    let reviews_count = raw.reviews_text.as_deref().map_or(0, extract_count);
    let rating = raw.rating_text.as_deref().map_or(0.0, extract_rating);
    let price = raw.price_text.as_deref().map_or(0.0, extract_price);
    let asin = text_or_unknown(raw.asin.as_deref());
    let publication_year = raw.date_text.as_deref().and_then(extract_year);

    BookListing {
        title,
        author,
        reviews_count,
        rating,
        price,
        asin,
        publication_year,
        extracted_at,
    }
}

fn text_or_unknown(text: Option<&str>) -> String {
    match text.map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Extracts the first run of digits from `text`, ignoring thousands
/// separators. Absence yields `0`, never an error.
#[must_use]
pub fn extract_count(text: &str) -> u32 {
    let re = Regex::new(r"\d+").expect("valid digit-run regex");
    let stripped = text.replace(',', "");
    re.find(&stripped)
        .map_or(0, |m| m.as_str().parse::<u32>().unwrap_or(u32::MAX))
}

/// Extracts the first floating-point number from rating text such as
/// `"4.5 out of 5 stars"`. Absence yields `0.0`.
///
/// The result is clamped to the rating domain `[0.0, 5.0]`.
#[must_use]
pub fn extract_rating(text: &str) -> f64 {
    let re = Regex::new(r"\d+\.?\d*").expect("valid rating regex");
    re.find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map_or(0.0, |r| r.clamp(0.0, 5.0))
}

/// Extracts the first `optional-$, digits, optional-decimal` token from
/// price text, ignoring thousands separators. Absence yields `0.0`.
#[must_use]
pub fn extract_price(text: &str) -> f64 {
    let re = Regex::new(r"\$?(\d+\.?\d*)").expect("valid price regex");
    let stripped = text.replace(',', "");
    re.captures(&stripped)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Finds all `20\d\d` year-like tokens in `text` and returns the **last**
/// one, favoring the most recently mentioned year. Returns `None` when no
/// such token exists.
#[must_use]
pub fn extract_year(text: &str) -> Option<i32> {
    let re = Regex::new(r"20\d{2}").expect("valid year regex");
    re.find_iter(text)
        .last()
        .and_then(|m| m.as_str().parse::<i32>().ok())
}
