//! Fan-out over expanded phrases with a streaming dedup fold.

use crate::core::{NewsClient, NewsItem};
use crate::provider;

use super::dedup::Deduper;
use super::limit::per_query_cap;
use super::text::clean_title;

/// Run every phrase in order, folding results into the deduper as they
/// arrive. A phrase failure contributes zero items and never aborts the
/// batch. Once the unique accumulator holds `2 × total` items no further
/// phrases are queried.
pub(crate) async fn aggregate(
    client: &NewsClient,
    phrases: &[String],
    total: usize,
) -> Vec<NewsItem> {
    if phrases.is_empty() || total == 0 {
        return Vec::new();
    }

    let per_cap = per_query_cap(total, phrases.len());
    let ceiling = total * 2;
    let mut deduper = Deduper::new();

    for phrase in phrases {
        if deduper.len() >= ceiling {
            tracing::debug!(
                unique = deduper.len(),
                ceiling,
                "early stop, enough unique items"
            );
            break;
        }
        let batch = provider::search_or_empty(client, phrase, per_cap as u32).await;
        for raw in batch {
            let title = clean_title(&raw.title);
            // Items with no usable title or link are dropped here and never
            // count toward the early-stop ceiling.
            if title.is_empty() || raw.link.is_empty() {
                continue;
            }
            deduper.fold(title, raw.link, raw.published_at);
        }
    }

    let mut items = deduper.into_items();
    items.truncate(total);
    for (idx, item) in items.iter_mut().enumerate() {
        item.no = idx as u32 + 1;
    }
    items
}
