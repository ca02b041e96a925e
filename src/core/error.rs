use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// The steady-state aggregation surface never returns this type; upstream
/// failures are logged and folded into empty per-phrase results. Only the
/// diagnostic path and client construction are fallible.
#[derive(Debug, Error)]
pub enum NewsError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The Naver client id/secret were not configured on the client.
    #[error("Naver client id/secret are not configured")]
    MissingCredentials,

    /// The data received was in an unexpected format or a request could not
    /// be constructed.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}
