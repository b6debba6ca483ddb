//! Trend-signal collection from public search pages.
//!
//! Produces the advisory [`nichescout_core::TrendSignal`] and
//! [`nichescout_core::YoutubeTrend`] annotations attached to opportunity
//! reports. Collection is best-effort: each source that fails is logged and
//! reported as absent rather than failing the run.

pub mod client;
pub mod error;
pub mod google;
pub mod youtube;

pub use client::{CollectedTrends, TrendsClient, DEFAULT_GOOGLE_BASE_URL, DEFAULT_YOUTUBE_BASE_URL};
pub use error::TrendsError;
