//! Configuration structures for Taiga clients.
//!
//! The configuration is an explicit, immutable value handed to
//! [`TaigaClientBuilder`](crate::client::TaigaClientBuilder). Credentials are not part
//! of it; the bearer token is supplied separately and kept secret.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Public Taiga cloud instance.
pub const DEFAULT_API_URL: &str = "https://api.taiga.io";

/// Configuration for a Taiga client instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TaigaClientConfig {
    /// Taiga host, with or without the `/api/v1` suffix
    #[validate(url)]
    pub api_url: String,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Ask Taiga to return complete lists instead of paginated ones
    #[serde(default)]
    pub disable_pagination: bool,

    /// Optional `User-Agent` override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

const fn default_tls_verify() -> bool {
    true
}

const fn default_request_timeout_secs() -> u64 {
    30
}

impl TaigaClientConfig {
    /// Create a new client configuration for the given Taiga host.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or validation fails.
    pub fn new(api_url: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            api_url: api_url.into(),
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
            disable_pagination: false,
            user_agent: None,
        };

        config
            .validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set TLS verification.
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

    /// Request unpaginated list responses.
    #[must_use]
    pub const fn with_pagination_disabled(mut self, disabled: bool) -> Self {
        self.disable_pagination = disabled;
        self
    }

    /// Override the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse the configured host URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        Url::parse(&self.api_url)
            .map_err(|e| Error::ConfigError(format!("Invalid Taiga URL: {e}")))
    }
}

impl Default for TaigaClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            tls_verify: default_tls_verify(),
            request_timeout_secs: default_request_timeout_secs(),
            disable_pagination: false,
            user_agent: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = TaigaClientConfig::new("https://taiga.example.com").unwrap();
        assert_eq!(config.api_url, "https://taiga.example.com");
        assert!(config.tls_verify);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.disable_pagination);
    }

    #[test]
    fn test_invalid_url_rejected() {
        let err = TaigaClientConfig::new("not a url").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_timeout_range_validated() {
        let config = TaigaClientConfig::default().with_timeout(0);
        assert!(config.validate().is_err());

        let config = TaigaClientConfig::default().with_timeout(300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = TaigaClientConfig::default()
            .with_tls_verify(false)
            .with_pagination_disabled(true)
            .with_user_agent("board-sync/1.0");
        assert!(!config.tls_verify);
        assert!(config.disable_pagination);
        assert_eq!(config.user_agent.as_deref(), Some("board-sync/1.0"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: TaigaClientConfig =
            serde_json::from_str(r#"{"api_url":"https://tree.taiga.io"}"#).unwrap();
        assert_eq!(config.request_timeout_secs, 30);
        assert!(config.tls_verify);
        assert!(config.user_agent.is_none());
        assert_eq!(
            config.parse_api_url().unwrap().as_str(),
            "https://tree.taiga.io/"
        );
    }
}
