//! Short-TTL memoization of aggregate results.
//!
//! Keys are composed from the call kind and its parameters by the feed layer.
//! A `put` is always a full-value replace, and there is no single-flight
//! guard: concurrent misses for the same key may each recompute, which is
//! acceptable because a recompute is bounded and idempotent.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::core::models::NewsItem;

#[derive(Debug)]
struct CacheEntry {
    items: Vec<NewsItem>,
    expires_at: Instant,
}

#[derive(Debug)]
pub(crate) struct ResultCache {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

impl ResultCache {
    pub(crate) fn new(default_ttl: Duration) -> Self {
        Self {
            map: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }

    pub(crate) async fn get(&self, key: &str) -> Option<Vec<NewsItem>> {
        let guard = self.map.read().await;
        if let Some(entry) = guard.get(key)
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.items.clone());
        }
        None
    }

    pub(crate) async fn put(&self, key: &str, items: &[NewsItem], ttl_override: Option<Duration>) {
        let ttl = ttl_override.unwrap_or(self.default_ttl);
        let entry = CacheEntry {
            items: items.to_vec(),
            expires_at: Instant::now() + ttl,
        };
        let mut guard = self.map.write().await;
        guard.insert(key.to_string(), entry);
    }
}
