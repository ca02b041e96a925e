//! ratenews-rs: aggregated market-news client for the Naver news-search API.
//!
//! One logical request expands a tracked instrument (or the fixed economy
//! topic bundle) into multiple search phrases, fans out one upstream call per
//! phrase, collapses duplicates by normalized link, and returns a capped,
//! densely numbered list of news items. Aggregate results for preset lookups
//! are memoized in a short-TTL in-process cache.

pub mod core;
pub mod feed;
pub mod provider;

pub use crate::core::{Backoff, NewsClient, NewsClientBuilder, NewsError, NewsItem, RetryConfig};
pub use crate::feed::{MAX_TOTAL_LIMIT, NewsFeed, NewsKey};
pub use crate::provider::RawResponse;
