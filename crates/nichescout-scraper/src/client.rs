use std::time::Duration;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use rand::Rng as _;

use nichescout_core::RawListing;

use crate::error::ScraperError;
use crate::parse::parse_search_page;
use crate::rate_limit::retry_with_backoff;

/// Production search origin. Tests point at a local mock server instead.
pub const DEFAULT_BASE_URL: &str = "https://www.amazon.com";

/// Random extra delay added on top of the configured inter-request delay so
/// page fetches do not tick at a fixed interval.
const JITTER_MAX_MS: u64 = 500;

/// HTTP client for the public book-search pages of a marketplace.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx responses
/// as typed errors. Transient failures (429, network errors) are retried with
/// exponential backoff up to `max_retries` additional attempts.
pub struct AmazonSearchClient {
    client: reqwest::Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff.
    backoff_base_secs: u64,
}

impl AmazonSearchClient {
    /// Creates a client with the given timeout, `User-Agent`, and retry
    /// policy. Set `max_retries` to `0` to disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScraperError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches one search page and parses it into raw listing fragments,
    /// retrying transient errors.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`] for HTTP 429 after retries are exhausted.
    /// - [`ScraperError::NotFound`] for HTTP 404 (not retried).
    /// - [`ScraperError::UnexpectedStatus`] for any other non-2xx status (not retried).
    /// - [`ScraperError::Http`] for network failures after retries are exhausted.
    pub async fn fetch_search_page(
        &self,
        base_url: &str,
        query: &str,
        page: usize,
    ) -> Result<Vec<RawListing>, ScraperError> {
        let url = search_url(base_url, query, page);

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(ScraperError::RateLimited {
                        domain: extract_domain(&url),
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(ScraperError::NotFound { url });
                }

                if !status.is_success() {
                    return Err(ScraperError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                let body = response.text().await?;
                Ok(parse_search_page(&body))
            }
        })
        .await
    }

    /// Collects up to `max_results` raw listings for `query`, walking search
    /// pages in order up to `max_pages`.
    ///
    /// Pagination stops early when a page yields no results (past the last
    /// page of a thin market) or once enough listings are collected. A
    /// jittered delay of `inter_request_delay_ms` plus up to half a second
    /// runs between page fetches.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_search_page`]. Listings from
    /// earlier pages are discarded when a later page fails.
    pub async fn search(
        &self,
        base_url: &str,
        query: &str,
        max_results: usize,
        max_pages: usize,
        inter_request_delay_ms: u64,
    ) -> Result<Vec<RawListing>, ScraperError> {
        let mut collected: Vec<RawListing> = Vec::new();

        for page in 1..=max_pages {
            if page > 1 {
                let jitter = rand::rng().random_range(0..=JITTER_MAX_MS);
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms + jitter)).await;
            }

            let listings = self.fetch_search_page(base_url, query, page).await?;
            if listings.is_empty() {
                tracing::debug!(query, page, "empty search page, stopping pagination");
                break;
            }

            tracing::debug!(query, page, results = listings.len(), "fetched search page");
            collected.extend(listings);
            if collected.len() >= max_results {
                break;
            }
        }

        collected.truncate(max_results);
        Ok(collected)
    }
}

/// Builds the search URL for one page of book results.
fn search_url(base_url: &str, query: &str, page: usize) -> String {
    let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
    format!("{base_url}/s?k={encoded}&i=stripbooks&page={page}")
}

/// Hostname for error messages; falls back to the full URL if parsing fails.
fn extract_domain(url: &str) -> String {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme.split('/').next().unwrap_or(url).to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- search_url ----

    #[test]
    fn search_url_encodes_query_and_sets_page() {
        let url = search_url("https://www.amazon.com", "sourdough baking", 3);
        assert_eq!(
            url,
            "https://www.amazon.com/s?k=sourdough%20baking&i=stripbooks&page=3"
        );
    }

    #[test]
    fn search_url_encodes_reserved_characters() {
        let url = search_url("https://www.amazon.com", "c++ & rust", 1);
        assert_eq!(
            url,
            "https://www.amazon.com/s?k=c%2B%2B%20%26%20rust&i=stripbooks&page=1"
        );
    }

    // ---- extract_domain ----

    #[test]
    fn extract_domain_strips_scheme_and_path() {
        assert_eq!(
            extract_domain("https://www.amazon.com/s?k=bread"),
            "www.amazon.com"
        );
    }

    #[test]
    fn extract_domain_handles_bare_host() {
        assert_eq!(extract_domain("localhost:9090"), "localhost:9090");
    }
}
