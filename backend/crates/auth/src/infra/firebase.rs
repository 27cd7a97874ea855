//! Firebase Identity Toolkit Provider
//!
//! Verifies ID tokens by asking the Identity Toolkit `accounts:lookup`
//! endpoint for the account the token belongs to. A token the provider
//! cannot resolve is rejected with HTTP 400 and an error message such as
//! `INVALID_ID_TOKEN` or `TOKEN_EXPIRED`.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::identity::{BearerToken, VerifiedIdentity};
use crate::domain::provider::IdentityProvider;
use crate::error::{AuthError, AuthResult};

/// Identity provider backed by Firebase Authentication
#[derive(Clone)]
pub struct FirebaseIdentityProvider {
    client: reqwest::Client,
    lookup_url: String,
}

impl FirebaseIdentityProvider {
    pub fn new(config: &AuthConfig) -> AuthResult<Self> {
        let client = platform::http_client::build_http_client(config.request_timeout)?;
        Ok(Self {
            client,
            lookup_url: config.lookup_url(),
        })
    }
}

impl IdentityProvider for FirebaseIdentityProvider {
    async fn verify(&self, token: &BearerToken) -> AuthResult<VerifiedIdentity> {
        let response = self
            .client
            .post(&self.lookup_url)
            .json(&LookupRequest {
                id_token: token.expose(),
            })
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            let reason = response
                .json::<ErrorEnvelope>()
                .await
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| "rejected".to_string());
            return Err(AuthError::InvalidToken(reason));
        }

        if !status.is_success() {
            return Err(AuthError::ProviderUnavailable(format!(
                "lookup returned status: {status}"
            )));
        }

        let body = response
            .json::<LookupResponse>()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        let user = body
            .users
            .into_iter()
            .next()
            .ok_or_else(|| AuthError::InvalidToken("no account for token".to_string()))?;

        if user.disabled {
            return Err(AuthError::InvalidToken("account disabled".to_string()));
        }

        tracing::debug!(user_id = %user.local_id, "ID token verified");

        Ok(VerifiedIdentity {
            user_id: user.local_id,
            email: user.email,
            display_name: user.display_name,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    id_token: &'a str,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: Option<String>,
    display_name: Option<String>,
    #[serde(default)]
    disabled: bool,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode as AxumStatus, routing::post};
    use serde_json::{Value, json};
    use std::time::Duration;

    async fn lookup(Json(body): Json<Value>) -> (AxumStatus, Json<Value>) {
        match body["idToken"].as_str() {
            Some("valid-token") => (
                AxumStatus::OK,
                Json(json!({
                    "kind": "identitytoolkit#GetAccountInfoResponse",
                    "users": [{
                        "localId": "uid-42",
                        "email": "ada@example.com",
                        "displayName": "Ada Lovelace"
                    }]
                })),
            ),
            Some("disabled-token") => (
                AxumStatus::OK,
                Json(json!({ "users": [{ "localId": "uid-7", "disabled": true }] })),
            ),
            Some("broken-token") => (AxumStatus::BAD_GATEWAY, Json(json!({}))),
            _ => (
                AxumStatus::BAD_REQUEST,
                Json(json!({ "error": { "code": 400, "message": "INVALID_ID_TOKEN" } })),
            ),
        }
    }

    async fn spawn_provider() -> FirebaseIdentityProvider {
        let app = Router::new().route("/v1/accounts:lookup", post(lookup));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = AuthConfig {
            api_key: "test-key".into(),
            identity_endpoint: format!("http://{addr}"),
            request_timeout: Duration::from_secs(5),
        };
        FirebaseIdentityProvider::new(&config).unwrap()
    }

    fn token(raw: &str) -> BearerToken {
        BearerToken::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn test_valid_token_yields_identity() {
        let provider = spawn_provider().await;
        let identity = provider.verify(&token("valid-token")).await.unwrap();

        assert_eq!(identity.user_id, "uid-42");
        assert_eq!(identity.email.as_deref(), Some("ada@example.com"));
        assert_eq!(identity.first_name(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_rejected_token() {
        let provider = spawn_provider().await;
        let err = provider.verify(&token("forged")).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(reason) if reason == "INVALID_ID_TOKEN"));
    }

    #[tokio::test]
    async fn test_disabled_account_is_rejected() {
        let provider = spawn_provider().await;
        let err = provider.verify(&token("disabled-token")).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let provider = spawn_provider().await;
        let err = provider.verify(&token("broken-token")).await.unwrap_err();
        assert!(matches!(err, AuthError::ProviderUnavailable(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider() {
        let config = AuthConfig {
            identity_endpoint: "http://127.0.0.1:1".into(),
            request_timeout: Duration::from_secs(2),
            ..AuthConfig::new("test-key")
        };
        let provider = FirebaseIdentityProvider::new(&config).unwrap();
        let err = provider.verify(&token("valid-token")).await.unwrap_err();
        assert!(matches!(err, AuthError::ProviderUnavailable(_)));
    }
}
