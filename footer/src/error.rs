/// Errors raised while talking to the streaming service or configuring the footer.
///
/// None of these are fatal. Footer operations log them and hand them back so
/// the caller can decide whether to look at them at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FooterError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Access token rejected by streaming service")]
    Unauthorized,

    #[error("Rate limited by streaming service (retry after {retry_after:?}s)")]
    RateLimited { retry_after: Option<u64> },

    #[error("Streaming service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid volume {0} (expected 0-100)")]
    InvalidVolume(u16),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<reqwest::Error> for FooterError {
    fn from(err: reqwest::Error) -> Self {
        FooterError::Request(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FooterError>;
