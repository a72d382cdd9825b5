//! Error types for tracking API operations.

use thiserror::Error;

use super::ErrorDetail;
use crate::transport::HttpError;

/// Error returned by every [`TrackClient`](super::TrackClient) operation.
///
/// [`TrackError::Network`] and [`TrackError::Client`] are the two failure
/// kinds a dispatched request can produce; callers typically retry the
/// former and inspect the latter. Neither is retried by the library.
#[derive(Debug, Error)]
pub enum TrackError {
    /// The HTTP exchange did not complete.
    ///
    /// Covers DNS failures, refused connections, TLS failures and timeouts.
    #[error("Customer.io network error for {url}: {source}")]
    Network {
        /// URL of the request that failed
        url: url::Url,
        /// Transport failure, carrying its message and code
        #[source]
        source: HttpError,
    },

    /// The server answered with a status other than 200.
    #[error("Customer.io client error ({status}): {}", .detail.message)]
    Client {
        /// Status code returned by the server
        status: http::StatusCode,
        /// Error details extracted from the response body
        detail: ErrorDetail,
    },

    /// The request could not be constructed, so nothing was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl TrackError {
    /// Returns true for [`TrackError::Network`].
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Returns true for [`TrackError::Client`].
    #[must_use]
    pub const fn is_client(&self) -> bool {
        matches!(self, Self::Client { .. })
    }

    /// Returns the failure message.
    ///
    /// For network failures this is the transport error message; for client
    /// failures it is the message extracted from the response body.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Network { source, .. } => source.message(),
            Self::Client { detail, .. } => detail.message.clone(),
            Self::InvalidRequest(reason) => reason.clone(),
        }
    }

    /// Returns the transport error code of a network failure.
    #[must_use]
    pub const fn code(&self) -> Option<u16> {
        match self {
            Self::Network { source, .. } => Some(source.code()),
            _ => None,
        }
    }

    /// Returns the URL of a network failure.
    #[must_use]
    pub const fn url(&self) -> Option<&url::Url> {
        match self {
            Self::Network { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Returns the HTTP status of a client failure.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Client { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the error list reported by the server, empty unless this is
    /// a client failure whose body listed errors.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Client { detail, .. } => &detail.errors,
            _ => &[],
        }
    }

    /// Returns the raw response body of a client failure, when it was
    /// valid UTF-8.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Client { detail, .. } => detail.body.as_deref(),
            _ => None,
        }
    }
}
