//! Error types for HTTP transport operations.

use thiserror::Error;

/// Error type for a request that never produced an HTTP response.
///
/// Describes what went wrong at the transport layer. The API client
/// surfaces these to callers unchanged; it never retries them.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// TLS handshake failures, and connections dropped mid-response.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The request could not be built from the given URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl HttpError {
    /// Code reported for [`HttpError::Connection`].
    pub const CODE_CONNECTION: u16 = 1;

    /// Code reported for [`HttpError::Timeout`].
    pub const CODE_TIMEOUT: u16 = 2;

    /// Code reported for [`HttpError::InvalidUrl`].
    pub const CODE_INVALID_URL: u16 = 3;

    /// Returns a stable numeric code identifying the failure kind.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Connection(_) => Self::CODE_CONNECTION,
            Self::Timeout => Self::CODE_TIMEOUT,
            Self::InvalidUrl(_) => Self::CODE_INVALID_URL,
        }
    }

    /// Returns the human-readable failure message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
