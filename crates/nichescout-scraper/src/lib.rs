pub mod client;
pub mod error;
pub mod parse;
mod rate_limit;

pub use client::{AmazonSearchClient, DEFAULT_BASE_URL};
pub use error::ScraperError;
pub use parse::parse_search_page;
