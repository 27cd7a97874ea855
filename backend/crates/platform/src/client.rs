//! Client identification utilities
//!
//! Common functions for identifying callers via HTTP headers.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

const BEARER_SCHEME: &str = "bearer";

/// Extract the credential carried in the `Authorization` header
///
/// The browser client sends the raw ID token as the header value; other
/// callers use the standard `Bearer <token>` form. Both are accepted.
///
/// ## Returns
/// * `Some(token)` - non-empty credential with any `Bearer` prefix removed
/// * `None` - header absent, not valid UTF-8, or blank
pub fn extract_authorization_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();

    let token = match (value.get(..BEARER_SCHEME.len()), value.get(BEARER_SCHEME.len()..)) {
        (Some(scheme), Some(rest))
            if scheme.eq_ignore_ascii_case(BEARER_SCHEME)
                && (rest.is_empty() || rest.starts_with(char::is_whitespace)) =>
        {
            rest.trim_start()
        }
        _ => value,
    };

    (!token.is_empty()).then_some(token)
}

/// Extract client IP address from headers
///
/// Checks X-Forwarded-For header first (for reverse proxy setups),
/// then falls back to direct connection IP.
///
/// ## Arguments
/// * `headers` - HTTP request headers
/// * `direct_ip` - Direct connection IP address
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}
