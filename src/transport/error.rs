use thiserror::Error;

/// The request produced no response.
///
/// Surfaced to callers unchanged; the API client never retries these.
#[derive(Debug, Error)]
pub enum HttpError {
    /// DNS, connect, TLS, or a body cut off mid-read.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The transport timeout elapsed first.
    #[error("Request timed out")]
    Timeout,

    /// reqwest could not build the request, usually a malformed URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_builder() {
            Self::InvalidUrl(e.to_string())
        } else {
            Self::Connection(Box::new(e))
        }
    }
}
