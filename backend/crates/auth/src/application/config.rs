//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Identity Toolkit REST base URL
pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Web API key of the identity provider project
    pub api_key: String,
    /// Base URL of the identity provider (overridable for emulators)
    pub identity_endpoint: String,
    /// Timeout for a single verification call
    pub request_timeout: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            identity_endpoint: DEFAULT_IDENTITY_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl AuthConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Full URL of the account lookup call, including the API key
    pub fn lookup_url(&self) -> String {
        format!(
            "{}/v1/accounts:lookup?key={}",
            self.identity_endpoint.trim_end_matches('/'),
            self.api_key
        )
    }
}
