/// One raw search hit as returned by the upstream, before adaptation.
#[derive(Debug, Clone)]
pub(crate) struct RawArticle {
    /// Headline as sent by the upstream; may contain `<b>` markup and
    /// HTML entities.
    pub(crate) title: String,
    /// Article link; the `originallink` fallback is already applied, but the
    /// result may still be empty.
    pub(crate) link: String,
    /// Publication time, verbatim; `-` when the upstream omitted it.
    pub(crate) published_at: String,
}

/// Raw upstream status and body for a single phrase, for diagnostics.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// The HTTP status code returned by the upstream.
    pub status: u16,
    /// The response body, verbatim.
    pub body: String,
}
