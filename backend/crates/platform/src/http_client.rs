//! Outbound HTTP client construction

use std::time::Duration;

/// User-Agent sent on every outbound request
pub const USER_AGENT: &str = concat!("memory-match/", env!("CARGO_PKG_VERSION"));

/// Error when building an outbound client
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Build a `reqwest::Client` with a whole-request timeout.
///
/// The client is cheap to clone and pools connections, so build it once and
/// share it.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, HttpClientError> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}
