//! Video-platform interest signals counted from a search page body.

use nichescout_core::{InterestLevel, YoutubeTrend};

/// Marker each rendered video result carries in the page payload.
const VIDEO_MARKER: &str = "videoRenderer";

/// Parses the interest signal out of one video search page.
///
/// Counts are substring occurrences in the raw body, which is how the page
/// embeds its result data. "day ago" and "days ago" are disjoint matches, so
/// summing both covers singular and plural upload ages.
#[must_use]
pub fn parse_video_page(body: &str) -> YoutubeTrend {
    let estimated_video_count = body.matches(VIDEO_MARKER).count();
    let recent_videos = body.matches("day ago").count() + body.matches("days ago").count();

    YoutubeTrend {
        estimated_video_count,
        recent_videos,
        interest_level: interest_level(estimated_video_count),
    }
}

fn interest_level(video_count: usize) -> InterestLevel {
    if video_count > 20 {
        InterestLevel::High
    } else if video_count > 10 {
        InterestLevel::Medium
    } else {
        InterestLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_with(videos: usize, singular_ages: usize, plural_ages: usize) -> String {
        let mut body = String::new();
        for _ in 0..videos {
            body.push_str(r#"{"videoRenderer":{"videoId":"x"}}"#);
        }
        for _ in 0..singular_ages {
            body.push_str("1 day ago ");
        }
        for _ in 0..plural_ages {
            body.push_str("3 days ago ");
        }
        body
    }

    #[test]
    fn counts_videos_and_recent_uploads() {
        let trend = parse_video_page(&body_with(5, 2, 3));
        assert_eq!(trend.estimated_video_count, 5);
        assert_eq!(trend.recent_videos, 5);
        assert_eq!(trend.interest_level, InterestLevel::Low);
    }

    #[test]
    fn interest_tiers_at_boundaries() {
        assert_eq!(parse_video_page(&body_with(21, 0, 0)).interest_level, InterestLevel::High);
        assert_eq!(parse_video_page(&body_with(20, 0, 0)).interest_level, InterestLevel::Medium);
        assert_eq!(parse_video_page(&body_with(11, 0, 0)).interest_level, InterestLevel::Medium);
        assert_eq!(parse_video_page(&body_with(10, 0, 0)).interest_level, InterestLevel::Low);
        assert_eq!(parse_video_page("").interest_level, InterestLevel::Low);
    }
}
