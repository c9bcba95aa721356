use thiserror::Error;

/// Failures of a single provider round trip.
///
/// All of these are retried by [`TranslationClient`](super::TranslationClient).
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_connect() {
            Self::Connect(e.to_string())
        } else {
            Self::Request(e.to_string())
        }
    }
}

/// A translation that could not be obtained.
///
/// Fatal for the document being translated.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Every attempt ended in a retryable failure.
    #[error("Translation service failed after {attempts} attempts (last error: {last})")]
    Exhausted { attempts: u32, last: String },

    /// The provider answered with a status that retrying will not fix.
    #[error("Translation service rejected the request with status {status}")]
    Rejected { status: u16 },

    #[error(transparent)]
    Cache(#[from] anyhow::Error),
}
