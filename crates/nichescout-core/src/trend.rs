//! Externally collected trend signal types.
//!
//! These are produced by the `nichescout-trends` collaborator and attached to
//! an opportunity report as read-only annotations. They never feed into the
//! opportunity score.

use serde::{Deserialize, Serialize};

/// Search-engine interest signal for a query, already scored 0–100 by the
/// collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSignal {
    /// Total search results reported for the query.
    pub total_results: u64,
    /// Number of "people also ask" entries on the results page.
    pub related_questions: u32,
    /// Count of recency markers ("hours ago", "days ago", "week ago") seen
    /// in the results.
    pub recent_content_indicators: u32,
    /// Combined interest score in `[0, 100]`.
    pub trend_score: u8,
}

/// Video-platform interest signal for a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YoutubeTrend {
    /// Number of video results counted on the search page.
    pub estimated_video_count: usize,
    /// Videos uploaded within roughly the last few days.
    pub recent_videos: usize,
    pub interest_level: InterestLevel,
}

/// Coarse interest tier derived from a video result count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestLevel {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for InterestLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterestLevel::High => write!(f, "high"),
            InterestLevel::Medium => write!(f, "medium"),
            InterestLevel::Low => write!(f, "low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interest_level_serializes_lowercase() {
        let json = serde_json::to_string(&InterestLevel::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn trend_signal_roundtrips_exactly() {
        let signal = TrendSignal {
            total_results: 1_340_000,
            related_questions: 4,
            recent_content_indicators: 7,
            trend_score: 85,
        };
        let json = serde_json::to_string(&signal).unwrap();
        let decoded: TrendSignal = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, signal);
    }
}
