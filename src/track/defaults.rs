//! Default values for the tracking API.
//!
//! Centralized constants to avoid magic strings scattered across the client.

/// Base URL of the tracking REST API.
pub const BASE_URL: &str = "https://track.customer.io/api";

/// API version path segment.
pub const API_VERSION: &str = "v1";

/// Path segment for the customers collection.
pub const CUSTOMERS: &str = "customers";

/// Path segment for a customer's events collection.
pub const EVENTS: &str = "events";

/// Content type for form-encoded payloads.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Content type for JSON payloads.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Message used when a failed response carries no readable error.
pub const UNKNOWN_RESPONSE: &str = "unknown response";

/// Default base URL as a parsed [`url::Url`].
///
/// # Panics
///
/// Never panics: [`BASE_URL`] is a valid absolute URL.
#[must_use]
pub fn base_url() -> url::Url {
    url::Url::parse(BASE_URL).expect("BASE_URL is a valid absolute URL")
}
