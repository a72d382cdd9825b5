//! Client-level configuration and per-request transport options.

use std::time::Duration;

use super::defaults;

/// Transport options applied to a request.
///
/// Client-wide defaults live in [`ClientConfig`]; each operation layers its
/// own options on top with [`RequestOptions::merged_over`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Extra headers to send
    pub headers: http::HeaderMap,
    /// Request timeout, passed to the transport unmodified
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, replacing any previous values for the same name.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Merges `self` over `defaults`, with `self` winning on collision.
    ///
    /// A header name present in `self` replaces every value the defaults
    /// hold for that name. Names only present in the defaults are kept.
    /// The timeout from `self` wins when set.
    #[must_use]
    pub fn merged_over(&self, defaults: &Self) -> Self {
        let mut headers = defaults.headers.clone();
        for name in self.headers.keys() {
            headers.remove(name);
        }
        for (name, value) in &self.headers {
            headers.append(name.clone(), value.clone());
        }

        Self {
            headers,
            timeout: self.timeout.or(defaults.timeout),
        }
    }
}

/// Configuration supplied when constructing a [`TrackClient`](super::TrackClient).
///
/// # Example
///
/// ```
/// use customerio_track::track::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_timeout(Duration::from_secs(10))
///     .with_header(
///         http::header::USER_AGENT,
///         http::HeaderValue::from_static("my-app/1.0"),
///     );
/// assert_eq!(config.base_url().as_str(), "https://track.customer.io/api");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    base_url: url::Url,
    options: RequestOptions,
}

impl ClientConfig {
    /// Creates a configuration pointing at the public tracking API
    /// with no extra options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: defaults::base_url(),
            options: RequestOptions::new(),
        }
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: url::Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Replaces the default request options.
    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: http::HeaderValue) -> Self {
        self.options = self.options.with_header(name, value);
        self
    }

    /// Sets the timeout applied to every request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.options = self.options.with_timeout(timeout);
        self
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &url::Url {
        &self.base_url
    }

    /// Returns the default request options.
    #[must_use]
    pub const fn options(&self) -> &RequestOptions {
        &self.options
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
