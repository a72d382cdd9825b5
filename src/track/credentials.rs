//! Site ID and secret key pair.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Credentials identifying and authenticating the caller's account.
///
/// Sent as HTTP Basic authentication (`site_id:secret_key`) on every request.
/// The secret key never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    site_id: String,
    secret_key: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(site_id: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Returns the site identifier.
    #[must_use]
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Builds the `Authorization` header value for HTTP Basic auth.
    ///
    /// The returned value is marked sensitive so that `http` omits it
    /// from its own `Debug` output.
    ///
    /// # Errors
    ///
    /// Returns [`http::header::InvalidHeaderValue`] if the encoded value is
    /// not a legal header value.
    pub fn authorization(&self) -> Result<http::HeaderValue, http::header::InvalidHeaderValue> {
        let encoded = STANDARD.encode(format!("{}:{}", self.site_id, self.secret_key));
        let mut value = http::HeaderValue::from_str(&format!("Basic {encoded}"))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("site_id", &self.site_id)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
