//! Search Provider Adapter: one upstream call per search phrase.
//!
//! The steady-state surface is total. Transport, credential, and parse
//! failures are logged and collapse into an empty batch so the fan-out loop
//! never aborts. The raw variant exists for operational troubleshooting only.

mod api;
mod model;
mod wire;

pub use model::RawResponse;
pub(crate) use model::RawArticle;

use crate::core::{NewsClient, NewsError};

/// Fetch one phrase, or an empty batch when anything goes wrong.
pub(crate) async fn search_or_empty(client: &NewsClient, phrase: &str, cap: u32) -> Vec<RawArticle> {
    match api::fetch_news(client, phrase, cap).await {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(phrase, error = %err, "news search failed, treating as empty");
            Vec::new()
        }
    }
}

/// Fetch one phrase and return the raw upstream status and body, without
/// parsing, dedup, or caching.
pub(crate) async fn raw_search(
    client: &NewsClient,
    phrase: &str,
    cap: u32,
) -> Result<RawResponse, NewsError> {
    api::fetch_raw(client, phrase, cap).await
}
