//! Configuration structures for configuration API clients.
//!
//! [`ScmClientConfig`] describes how to reach and authenticate against one
//! deployment. It is typically deserialized from a file or environment-backed
//! source and validated before a transport is built from it.

use crate::auth::ClientCredentials;
use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Default OAuth2 token endpoint.
pub const DEFAULT_AUTH_URL: &str = "https://auth.apps.paloaltonetworks.com/am/oauth2/access_token";

/// Configuration for a client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScmClientConfig {
    /// API base URL, e.g. `https://api.strata.paloaltonetworks.com`
    #[validate(url)]
    pub api_url: String,

    /// Logical host override; defaults to the host of `api_url`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// OAuth2 token endpoint
    #[validate(url)]
    #[serde(default = "default_auth_url")]
    pub auth_url: String,

    /// OAuth2 client id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// OAuth2 client secret
    #[serde(default, skip_serializing)]
    pub client_secret: Option<String>,

    /// Tenant service group the token is scoped to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsg_id: Option<String>,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

const fn default_tls_verify() -> bool {
    true
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl ScmClientConfig {
    /// Create a new configuration for the given API URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(api_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            api_url: api_url.into(),
            host: None,
            auth_url: default_auth_url(),
            client_id: None,
            client_secret: None,
            tsg_id: None,
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
        };

        config.check()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing every failed rule.
    pub fn check(&self) -> Result<(), Error> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))
    }

    /// Set the logical host override.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the OAuth2 token endpoint.
    #[must_use]
    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self
    }

    /// Set OAuth2 client credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        tsg_id: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self.tsg_id = Some(tsg_id.into());
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse the API URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        Url::parse(&self.api_url)
            .map_err(|e| Error::ConfigError(format!("Invalid API URL: {e}")))
    }

    /// Client credentials, if all three parts are configured.
    #[must_use]
    pub fn credentials(&self) -> Option<ClientCredentials> {
        match (&self.client_id, &self.client_secret, &self.tsg_id) {
            (Some(id), Some(secret), Some(tsg)) => {
                Some(ClientCredentials::new(id.clone(), secret.clone(), tsg.clone()))
            }
            _ => None,
        }
    }
}

impl Default for ScmClientConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.strata.paloaltonetworks.com".to_string(),
            host: None,
            auth_url: default_auth_url(),
            client_id: None,
            client_secret: None,
            tsg_id: None,
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = ScmClientConfig::new("https://api.sase.paloaltonetworks.com").unwrap();
        assert_eq!(config.api_url, "https://api.sase.paloaltonetworks.com");
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
        assert!(config.tls_verify);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_config_invalid_url() {
        let result = ScmClientConfig::new("not-a-url");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_config_builder() {
        let config = ScmClientConfig::new("https://api.strata.paloaltonetworks.com")
            .unwrap()
            .with_host("api.sase.paloaltonetworks.com")
            .with_credentials("client@123.iam", "s3cret", "1234567890")
            .with_tls_verify(false)
            .with_timeout(60);

        assert_eq!(config.host.as_deref(), Some("api.sase.paloaltonetworks.com"));
        assert!(!config.tls_verify);
        assert_eq!(config.timeout(), Duration::from_secs(60));

        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.client_id, "client@123.iam");
        assert_eq!(credentials.tsg_id, "1234567890");
    }

    #[test]
    fn test_config_parse_api_url() {
        let config = ScmClientConfig::new("https://api.strata.paloaltonetworks.com:8443").unwrap();
        let url = config.parse_api_url().unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("api.strata.paloaltonetworks.com"));
        assert_eq!(url.port(), Some(8443));
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let config: ScmClientConfig =
            serde_json::from_str(r#"{"api_url": "https://api.sase.paloaltonetworks.com"}"#)
                .unwrap();
        assert_eq!(config.auth_url, DEFAULT_AUTH_URL);
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.tls_verify);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_secret_is_not_serialized() {
        let config = ScmClientConfig::default().with_credentials("id", "s3cret", "tsg");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"client_id\":\"id\""));
        assert!(!json.contains("s3cret"));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = ScmClientConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.check().is_err());

        config.request_timeout_secs = 301;
        assert!(config.check().is_err());

        config.request_timeout_secs = 30;
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_config_validation_auth_url() {
        let config = ScmClientConfig::default().with_auth_url("nope");
        assert!(config.check().is_err());
    }
}
