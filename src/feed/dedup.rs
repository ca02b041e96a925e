//! Identity keys and the order-preserving duplicate fold.

use std::collections::HashSet;

use url::Url;

use crate::core::NewsItem;

/// Query-parameter key prefixes stripped during link normalization.
/// Extend here, not in the matching logic.
const TRACKING_PREFIXES: &[&str] = &["utm_"];

/// Exact query-parameter keys stripped during link normalization.
const TRACKING_PARAMS: &[&str] = &["fbclid", "gclid"];

fn is_tracking_param(key: &str) -> bool {
    let key = key.to_ascii_lowercase();
    TRACKING_PREFIXES.iter().any(|p| key.starts_with(p))
        || TRACKING_PARAMS.iter().any(|n| key == *n)
}

/// Strip tracking parameters from a link and reserialize it.
/// `None` when the link cannot be parsed as an absolute URL.
///
/// Normalization is idempotent: feeding the output back in yields the same
/// string.
pub(crate) fn normalize_link(link: &str) -> Option<String> {
    let mut url = Url::parse(link).ok()?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !is_tracking_param(k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if kept.is_empty() {
        url.set_query(None);
    } else {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        for (k, v) in &kept {
            pairs.append_pair(k, v);
        }
    }
    Some(url.to_string())
}

/// Order-preserving unique accumulator. The first occurrence of an identity
/// key wins; later items with the same key are discarded even when their
/// content differs.
#[derive(Debug, Default)]
pub(crate) struct Deduper {
    seen: HashSet<String>,
    items: Vec<NewsItem>,
    degenerate: usize,
}

impl Deduper {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of unique items folded so far.
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Fold one adapted item; returns whether it was kept.
    /// Numbering is left at 0 and assigned after capping.
    pub(crate) fn fold(&mut self, title: String, link: String, published_at: String) -> bool {
        let key = self.identity_key(&title, &link);
        if !self.seen.insert(key) {
            return false;
        }
        self.items.push(NewsItem {
            no: 0,
            title,
            link,
            published_at,
        });
        true
    }

    pub(crate) fn into_items(self) -> Vec<NewsItem> {
        self.items
    }

    /// Normalized link, else trimmed title, else a key unique to this item
    /// so degenerate entries never collide with anything.
    fn identity_key(&mut self, title: &str, link: &str) -> String {
        if !link.is_empty()
            && let Some(normalized) = normalize_link(link)
        {
            return normalized;
        }
        let title = title.trim();
        if !title.is_empty() {
            return title.to_string();
        }
        self.degenerate += 1;
        format!("\u{1}degenerate-{}", self.degenerate)
    }
}
