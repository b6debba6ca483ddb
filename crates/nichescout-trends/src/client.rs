use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use nichescout_core::{TrendSignal, YoutubeTrend};

use crate::error::TrendsError;
use crate::google::parse_search_page;
use crate::youtube::parse_video_page;

/// Production search origins. Tests point at a local mock server instead.
pub const DEFAULT_GOOGLE_BASE_URL: &str = "https://www.google.com";
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.youtube.com";

/// Everything trend collection produced for one query. Either side may be
/// absent when its source failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedTrends {
    pub search: Option<TrendSignal>,
    pub youtube: Option<YoutubeTrend>,
}

/// HTTP client for the two public trend sources.
///
/// Fetches are best-effort with no retries: a trend signal is an annotation,
/// not a required input, so a failed source is logged and skipped.
pub struct TrendsClient {
    client: reqwest::Client,
}

impl TrendsClient {
    /// Creates a client with the given timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, TrendsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches and parses the search-engine interest signal for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::UnexpectedStatus`] for any non-2xx response and
    /// [`TrendsError::Http`] for network failures.
    pub async fn fetch_search_trends(
        &self,
        base_url: &str,
        query: &str,
    ) -> Result<TrendSignal, TrendsError> {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        let url = format!("{base_url}/search?q={encoded}");
        let body = self.fetch_page(&url).await?;
        Ok(parse_search_page(&body))
    }

    /// Fetches and parses the video-platform interest signal for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`TrendsError::UnexpectedStatus`] for any non-2xx response and
    /// [`TrendsError::Http`] for network failures.
    pub async fn fetch_youtube_trends(
        &self,
        base_url: &str,
        query: &str,
    ) -> Result<YoutubeTrend, TrendsError> {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
        let url = format!("{base_url}/results?search_query={encoded}");
        let body = self.fetch_page(&url).await?;
        Ok(parse_video_page(&body))
    }

    /// Collects signals from both sources for `query`.
    ///
    /// Continues past individual source failures, logging warnings. Returns
    /// an empty [`CollectedTrends`] if both sources fail.
    pub async fn collect(
        &self,
        google_base_url: &str,
        youtube_base_url: &str,
        query: &str,
    ) -> CollectedTrends {
        let search = match self.fetch_search_trends(google_base_url, query).await {
            Ok(signal) => {
                tracing::debug!(query, score = signal.trend_score, "collected search trends");
                Some(signal)
            }
            Err(e) => {
                tracing::warn!(
                    query,
                    source = "google_search",
                    error = %e,
                    "search trends fetch failed"
                );
                None
            }
        };

        let youtube = match self.fetch_youtube_trends(youtube_base_url, query).await {
            Ok(trend) => {
                tracing::debug!(
                    query,
                    videos = trend.estimated_video_count,
                    "collected video trends"
                );
                Some(trend)
            }
            Err(e) => {
                tracing::warn!(
                    query,
                    source = "youtube_search",
                    error = %e,
                    "video trends fetch failed"
                );
                None
            }
        };

        CollectedTrends { search, youtube }
    }

    async fn fetch_page(&self, url: &str) -> Result<String, TrendsError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrendsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }
        Ok(response.text().await?)
    }
}
