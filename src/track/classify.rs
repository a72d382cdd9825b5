//! Response classification.

use serde::Deserialize;
use serde_json::Value;

use super::{TrackError, defaults};
use crate::transport::{HttpError, HttpResponse};

/// Error information extracted from a failed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Value of `meta.error`, or a generic message when absent
    pub message: String,
    /// Entries of `meta.errors`, when the body lists them
    pub errors: Vec<String>,
    /// Raw response body, when it is valid UTF-8
    pub body: Option<String>,
}

/// Error envelope returned by the API: `{"meta": {"error": ..., "errors": [...]}}`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    meta: ErrorMeta,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorMeta {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    errors: Option<Value>,
}

impl ErrorDetail {
    /// Extracts error details from a response body.
    ///
    /// Never fails: a body that is not JSON, or JSON without `meta.error`,
    /// yields the generic [`defaults::UNKNOWN_RESPONSE`] message.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        let meta = serde_json::from_slice::<ErrorBody>(body)
            .unwrap_or_default()
            .meta;

        let message = meta
            .error
            .as_ref()
            .and_then(scalar_text)
            .unwrap_or_else(|| defaults::UNKNOWN_RESPONSE.to_string());

        let errors = meta
            .errors
            .as_ref()
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(scalar_text).collect())
            .unwrap_or_default();

        Self {
            message,
            errors,
            body: std::str::from_utf8(body).ok().map(ToString::to_string),
        }
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
        other => Some(other.to_string()),
    }
}

/// Classifies the outcome of a dispatched request.
///
/// 1. A transport error becomes [`TrackError::Network`], keeping the error
///    and the request URL as-is.
/// 2. Any status other than exactly 200 becomes [`TrackError::Client`].
///    This includes other 2xx codes such as 201 and 204.
/// 3. A 200 response succeeds whatever its body.
///
/// # Errors
///
/// Returns [`TrackError::Network`] or [`TrackError::Client`] as described above.
pub fn classify(
    url: &url::Url,
    outcome: Result<HttpResponse, HttpError>,
) -> Result<bool, TrackError> {
    let response = outcome.map_err(|source| TrackError::Network {
        url: url.clone(),
        source,
    })?;

    if response.status != http::StatusCode::OK {
        return Err(TrackError::Client {
            status: response.status,
            detail: ErrorDetail::from_body(&response.body),
        });
    }

    Ok(true)
}
