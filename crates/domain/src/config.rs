//! Client configuration structures

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::errors::{ReelgridError, Result};

/// Configuration for the platform client
///
/// The client credentials are used to derive the fallback basic authorization
/// header applied to calls made without an authenticated account. The
/// fallback is explicit injected configuration rather than ambient state, so
/// two clients with different credentials can coexist in one process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Platform API base URL
    pub base_url: String,
    /// OAuth client identifier issued by the platform
    pub client_id: String,
    /// OAuth client secret issued by the platform
    pub client_secret: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent reported on every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Create a configuration with default base URL, timeout and user agent.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `ReelgridError::Config` if the base URL does not parse or a
    /// client credential is blank.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.base_url)
            .map_err(|e| ReelgridError::Config(format!("invalid base url: {e}")))?;
        if self.client_id.trim().is_empty() {
            return Err(ReelgridError::Config("client_id must not be blank".into()));
        }
        if self.client_secret.trim().is_empty() {
            return Err(ReelgridError::Config("client_secret must not be blank".into()));
        }
        Ok(())
    }

    /// The fallback `Basic` authorization header value derived from the
    /// client credentials.
    #[must_use]
    pub fn basic_credential(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", BASE64.encode(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_credential_encodes_id_and_secret() {
        let config = ClientConfig::new("id", "secret");
        // base64("id:secret")
        assert_eq!(config.basic_credential(), "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn validate_rejects_blank_secret() {
        let config = ClientConfig::new("id", "   ");
        assert!(matches!(config.validate(), Err(ReelgridError::Config(_))));
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let config = ClientConfig::new("id", "secret").with_base_url("not a url");
        assert!(matches!(config.validate(), Err(ReelgridError::Config(_))));
    }

    #[test]
    fn defaults_are_applied() {
        let config = ClientConfig::new("id", "secret");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.validate().is_ok());
    }
}
