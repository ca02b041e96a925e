use serde::Serialize;

/// A single aggregated news item, ready for display.
///
/// Every item surfaced to a caller has a non-empty `title` and `link`;
/// upstream entries that fail that check are dropped during adaptation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// Dense position within the returned list, starting at 1.
    pub no: u32,
    /// The headline, with markup tags and HTML entities removed.
    pub title: String,
    /// A direct link to the article (portal or original publisher).
    pub link: String,
    /// The upstream publication time, verbatim (RFC-1123 text); `-` when the
    /// upstream omitted it. Opaque display data, never reparsed for ordering.
    pub published_at: String,
}
