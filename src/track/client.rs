//! Tracking API client.

use tracing::debug;

use super::{
    Attributes, ClientConfig, Credentials, RequestOptions, TrackError, classify,
    customer_payload, defaults, encode_form, encode_json, event_payload,
};
use crate::transport::{HttpClient, HttpRequest, ReqwestClient};

/// Client for the Customer.io tracking API.
///
/// Every operation performs one request/response round trip and returns
/// `Ok(true)` on success. Any other outcome is a [`TrackError`]; there is
/// no partial success and no automatic retry.
///
/// The client holds no per-call state, so a single instance can be shared
/// between tasks.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use customerio_track::track::{Attributes, Credentials, TrackClient};
///
/// # async fn example() -> Result<(), customerio_track::track::TrackError> {
/// let client = TrackClient::with_reqwest(Credentials::new("site-id", "secret-key"));
///
/// let mut attributes = Attributes::new();
/// attributes.insert("plan".to_string(), "pro".into());
///
/// client.create_customer("42", "a@example.com", &attributes).await?;
/// client.track_event("42", "purchased", &Attributes::new()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TrackClient<H = ReqwestClient> {
    http: H,
    credentials: Credentials,
    config: ClientConfig,
}

impl TrackClient<ReqwestClient> {
    /// Creates a client backed by a default [`ReqwestClient`].
    #[must_use]
    pub fn with_reqwest(credentials: Credentials) -> Self {
        Self::new(ReqwestClient::new(), credentials)
    }
}

impl<H> TrackClient<H> {
    /// Creates a client with the default [`ClientConfig`].
    #[must_use]
    pub fn new(http: H, credentials: Credentials) -> Self {
        Self::with_config(http, credentials, ClientConfig::default())
    }

    /// Creates a client with the given configuration.
    #[must_use]
    pub const fn with_config(http: H, credentials: Credentials, config: ClientConfig) -> Self {
        Self {
            http,
            credentials,
            config,
        }
    }

    /// Returns the credentials attached to every request.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl<H: HttpClient> TrackClient<H> {
    /// Creates a customer, sending the payload form-encoded.
    ///
    /// The upstream service treats this as an upsert, so it has the same
    /// effect as [`update_customer`](Self::update_customer).
    ///
    /// # Errors
    ///
    /// Returns [`TrackError`] if the request fails or is rejected.
    pub async fn create_customer(
        &self,
        customer_id: &str,
        email: &str,
        attributes: &Attributes,
    ) -> Result<bool, TrackError> {
        let url = self.customer_url(customer_id, &[])?;
        let body = encode_form(&customer_payload(email, attributes)).into_bytes();
        let request = self.build_request(
            HttpRequest::put(url),
            &content_type(defaults::FORM_CONTENT_TYPE),
            Some(body),
        )?;
        self.dispatch(request).await
    }

    /// Updates a customer, sending the payload as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError`] if the request fails or is rejected.
    pub async fn update_customer(
        &self,
        customer_id: &str,
        email: &str,
        attributes: &Attributes,
    ) -> Result<bool, TrackError> {
        let url = self.customer_url(customer_id, &[])?;
        let body = encode_json(&customer_payload(email, attributes))?;
        let request = self.build_request(
            HttpRequest::put(url),
            &content_type(defaults::JSON_CONTENT_TYPE),
            Some(body),
        )?;
        self.dispatch(request).await
    }

    /// Deletes a customer and all data attached to it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError`] if the request fails or is rejected.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<bool, TrackError> {
        let url = self.customer_url(customer_id, &[])?;
        let request = self.build_request(HttpRequest::delete(url), &RequestOptions::new(), None)?;
        self.dispatch(request).await
    }

    /// Records a named event for a customer.
    ///
    /// `metadata` is sent under `data` only when it is non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`TrackError`] if the request fails or is rejected.
    pub async fn track_event(
        &self,
        customer_id: &str,
        event_name: &str,
        metadata: &Attributes,
    ) -> Result<bool, TrackError> {
        let url = self.customer_url(customer_id, &[defaults::EVENTS])?;
        let body = encode_form(&event_payload(event_name, metadata)).into_bytes();
        let request = self.build_request(
            HttpRequest::post(url),
            &content_type(defaults::FORM_CONTENT_TYPE),
            Some(body),
        )?;
        self.dispatch(request).await
    }

    /// Builds `{base}/v1/customers/{customer_id}[/{extra}...]`.
    ///
    /// The customer ID is percent-encoded as a single path segment. `.` and
    /// `..` are rejected: URL normalization would drop them and address a
    /// different resource.
    fn customer_url(&self, customer_id: &str, extra: &[&str]) -> Result<url::Url, TrackError> {
        if customer_id.is_empty() {
            return Err(TrackError::InvalidRequest(
                "customer id must not be empty".to_string(),
            ));
        }
        if customer_id == "." || customer_id == ".." {
            return Err(TrackError::InvalidRequest(format!(
                "customer id must not be a dot segment: {customer_id:?}"
            )));
        }

        let mut url = self.config.base_url().clone();
        url.path_segments_mut()
            .map_err(|()| {
                TrackError::InvalidRequest(format!(
                    "base URL cannot carry a path: {}",
                    self.config.base_url()
                ))
            })?
            .pop_if_empty()
            .extend([defaults::API_VERSION, defaults::CUSTOMERS, customer_id])
            .extend(extra);
        Ok(url)
    }

    /// Applies merged options, credentials and body to a request.
    fn build_request(
        &self,
        mut request: HttpRequest,
        per_call: &RequestOptions,
        body: Option<Vec<u8>>,
    ) -> Result<HttpRequest, TrackError> {
        let options = per_call.merged_over(self.config.options());

        let authorization = self
            .credentials
            .authorization()
            .map_err(|e| TrackError::InvalidRequest(format!("invalid credentials: {e}")))?;

        request.headers = options.headers;
        request
            .headers
            .insert(http::header::AUTHORIZATION, authorization);
        request.timeout = options.timeout;
        request.body = body;
        Ok(request)
    }

    async fn dispatch(&self, request: HttpRequest) -> Result<bool, TrackError> {
        let url = request.url.clone();
        debug!(method = %request.method, %url, "Sending tracking request");

        let outcome = self.http.request(request).await;
        let result = classify(&url, outcome);

        match &result {
            Ok(_) => debug!(%url, "Tracking request accepted"),
            Err(e) => debug!(%url, error = %e, "Tracking request failed"),
        }
        result
    }
}

fn content_type(value: &'static str) -> RequestOptions {
    RequestOptions::new().with_header(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static(value),
    )
}
