//! The aggregation engine: expansion, fan-out, dedup, capping, caching.

mod dedup;
mod expand;
mod limit;
mod merge;
mod text;

pub use expand::NewsKey;

use crate::core::{NewsClient, NewsError, NewsItem};
use crate::provider::{self, RawResponse};

/// Upper bound on the number of items a single request may return.
pub const MAX_TOTAL_LIMIT: u32 = 50;

/// Facade over the aggregation pipeline.
///
/// All steady-state methods are total: they always return a list (possibly
/// empty) and never an error. Upstream failures are logged and folded into
/// empty per-phrase results; only [`NewsFeed::raw_phrase`] is fallible.
#[derive(Debug, Clone)]
pub struct NewsFeed {
    client: NewsClient,
}

impl NewsFeed {
    pub fn new(client: &NewsClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// News for a preset instrument key. Results are cached per
    /// `(key, limit)` for the client's cache TTL.
    pub async fn by_key(&self, key: NewsKey, limit: u32) -> Vec<NewsItem> {
        let limit = clamp_limit(limit);
        let cache_key = format!("key-{}-{limit}", key.as_str());
        if let Some(hit) = self.client.cache_get(&cache_key).await {
            tracing::debug!(key = key.as_str(), limit, "news cache hit");
            return hit;
        }
        let phrases = expand::expand_key(key);
        let items = merge::aggregate(&self.client, &phrases, limit as usize).await;
        self.client.cache_put(&cache_key, &items, None).await;
        items
    }

    /// Ad-hoc free-text search. Never cached: the key space is unbounded and
    /// memoizing it buys little. Blank input short-circuits to an empty list
    /// without touching the upstream.
    pub async fn free_text(&self, text: &str, limit: u32) -> Vec<NewsItem> {
        let limit = clamp_limit(limit);
        let phrases = expand::expand_free_text(text);
        if phrases.is_empty() {
            return Vec::new();
        }
        merge::aggregate(&self.client, &phrases, limit as usize).await
    }

    /// The fixed economy topic bundle. Cached per limit.
    pub async fn economy(&self, limit: u32) -> Vec<NewsItem> {
        let limit = clamp_limit(limit);
        let cache_key = format!("economy-{limit}");
        if let Some(hit) = self.client.cache_get(&cache_key).await {
            tracing::debug!(limit, "economy news cache hit");
            return hit;
        }
        let phrases = expand::economy_phrases();
        let items = merge::aggregate(&self.client, &phrases, limit as usize).await;
        self.client.cache_put(&cache_key, &items, None).await;
        items
    }

    /// News for a chart symbol or listing code: mapped to a preset key when
    /// known (cached via [`NewsFeed::by_key`]), otherwise treated as free
    /// text.
    pub async fn for_symbol(&self, symbol: &str, limit: u32) -> Vec<NewsItem> {
        if symbol.trim().is_empty() {
            return Vec::new();
        }
        match expand::key_for_symbol(symbol) {
            Some(key) => self.by_key(key, limit).await,
            None => self.free_text(symbol, limit).await,
        }
    }

    /// Diagnostic: the raw upstream status and body for a single phrase,
    /// bypassing expansion, dedup, and cache.
    ///
    /// # Errors
    ///
    /// Returns a `NewsError` when the request cannot be issued at all
    /// (missing credentials, connection failure). Non-2xx upstream statuses
    /// are reported inside the returned [`RawResponse`], not as errors.
    pub async fn raw_phrase(&self, phrase: &str, cap: u32) -> Result<RawResponse, NewsError> {
        provider::raw_search(&self.client, phrase, cap).await
    }
}

fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_TOTAL_LIMIT)
}
