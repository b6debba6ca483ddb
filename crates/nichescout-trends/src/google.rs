//! Search-engine interest signals scraped from a results page.
//!
//! Works off page text alone: the reported result count, the number of
//! "people also ask" entries, and recency markers in snippets. Crude, but a
//! free stand-in for a trends API and good enough for a relative signal.

use nichescout_core::TrendSignal;
use regex::Regex;

/// Marker each "people also ask" entry carries on the results page.
const RELATED_QUESTION_MARKER: &str = "related-question-pair";

/// Parses the interest signal out of one search-results page.
#[must_use]
pub fn parse_search_page(html: &str) -> TrendSignal {
    let count_re = Regex::new(r"About ([\d,]+)").expect("valid result-count regex");
    let total_results = count_re
        .captures(html)
        .and_then(|caps| caps[1].replace(',', "").parse::<u64>().ok())
        .unwrap_or(0);

    let related_questions =
        u32::try_from(html.matches(RELATED_QUESTION_MARKER).count()).unwrap_or(u32::MAX);

    let recency_re = Regex::new(r"hours ago|days ago|week ago").expect("valid recency regex");
    let recent_content_indicators =
        u32::try_from(recency_re.find_iter(html).count()).unwrap_or(u32::MAX);

    TrendSignal {
        total_results,
        related_questions,
        recent_content_indicators,
        trend_score: trend_score(total_results, related_questions, recent_content_indicators),
    }
}

/// Combines the three page signals into a `[0, 100]` interest score.
///
/// Result count contributes a coarse 10/20/30 band, each related question
/// adds 10 points up to 30, and each recency marker adds 5 points up to 20.
#[must_use]
pub fn trend_score(total_results: u64, related_questions: u32, recent_indicators: u32) -> u8 {
    let mut score: u32 = if total_results > 1_000_000 {
        30
    } else if total_results > 100_000 {
        20
    } else {
        10
    };

    score += (related_questions.saturating_mul(10)).min(30);
    score += (recent_indicators.saturating_mul(5)).min(20);

    u8::try_from(score.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- trend_score ----

    #[test]
    fn score_bands_by_result_count() {
        assert_eq!(trend_score(1_000_001, 0, 0), 30);
        assert_eq!(trend_score(1_000_000, 0, 0), 20);
        assert_eq!(trend_score(100_001, 0, 0), 20);
        assert_eq!(trend_score(100_000, 0, 0), 10);
        assert_eq!(trend_score(0, 0, 0), 10);
    }

    #[test]
    fn question_contribution_caps_at_thirty() {
        assert_eq!(trend_score(0, 2, 0), 10 + 20);
        assert_eq!(trend_score(0, 3, 0), 10 + 30);
        assert_eq!(trend_score(0, 50, 0), 10 + 30);
    }

    #[test]
    fn recency_contribution_caps_at_twenty() {
        assert_eq!(trend_score(0, 0, 3), 10 + 15);
        assert_eq!(trend_score(0, 0, 4), 10 + 20);
        assert_eq!(trend_score(0, 0, 100), 10 + 20);
    }

    #[test]
    fn maximum_score_is_eighty() {
        // 30 + 30 + 20; the formula never reaches the nominal 100 cap.
        assert_eq!(trend_score(2_000_000, 10, 10), 80);
    }

    // ---- parse_search_page ----

    #[test]
    fn parses_result_count_with_separators() {
        let html = r#"<div id="result-stats">About 1,340,000 results</div>"#;
        let signal = parse_search_page(html);
        assert_eq!(signal.total_results, 1_340_000);
        assert_eq!(signal.trend_score, 30);
    }

    #[test]
    fn missing_result_stats_defaults_to_zero() {
        let signal = parse_search_page("<html><body>no stats block</body></html>");
        assert_eq!(signal.total_results, 0);
        assert_eq!(signal.trend_score, 10);
    }

    #[test]
    fn counts_related_questions_and_recency_markers() {
        let html = concat!(
            r#"<div class="related-question-pair">Q1</div>"#,
            r#"<div class="related-question-pair">Q2</div>"#,
            "<span>3 hours ago</span>",
            "<span>2 days ago</span>",
        );
        let signal = parse_search_page(html);
        assert_eq!(signal.related_questions, 2);
        assert_eq!(signal.recent_content_indicators, 2);
        assert_eq!(signal.trend_score, 10 + 20 + 10);
    }
}
