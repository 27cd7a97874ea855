//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Message returned to the caller for every rejected request
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential in the request
    #[error("No ID token in request")]
    MissingToken,

    /// The identity provider rejected the credential
    #[error("ID token rejected: {0}")]
    InvalidToken(String),

    /// The identity provider could not be reached or replied unexpectedly
    #[error("Identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider verified the token but a required claim is absent
    #[error("Verified identity is missing {0}")]
    IncompleteIdentity(&'static str),

    /// The provider client could not be constructed
    #[error("Identity client setup failed: {0}")]
    Client(#[from] platform::http_client::HttpClientError),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::InvalidToken(_)
            | AuthError::ProviderUnavailable(_)
            | AuthError::IncompleteIdentity(_) => StatusCode::FORBIDDEN,
            AuthError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken
            | AuthError::InvalidToken(_)
            | AuthError::ProviderUnavailable(_)
            | AuthError::IncompleteIdentity(_) => ErrorKind::Forbidden,
            AuthError::Client(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError. The caller only ever sees "Unauthorized".
    pub fn to_app_error(&self) -> AppError {
        match self.kind() {
            ErrorKind::Forbidden => AppError::forbidden(UNAUTHORIZED_MESSAGE),
            kind => AppError::new(kind, kind.as_str()),
        }
    }

    /// Log the error with appropriate level
    pub(crate) fn log(&self) {
        match self {
            AuthError::MissingToken => {
                tracing::info!("Error: No ID Token.");
            }
            AuthError::InvalidToken(reason) => {
                tracing::warn!(reason = %reason, "ID token rejected by identity provider");
            }
            AuthError::ProviderUnavailable(reason) => {
                tracing::error!(reason = %reason, "Identity provider unavailable");
            }
            AuthError::Client(e) => {
                tracing::error!(error = %e, "Identity client error");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_rejection_has_identical_body() {
        let errors = vec![
            AuthError::MissingToken,
            AuthError::InvalidToken("INVALID_ID_TOKEN".into()),
            AuthError::ProviderUnavailable("connection refused".into()),
            AuthError::IncompleteIdentity("display name"),
        ];

        for error in errors {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);

            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(body, serde_json::json!({ "error": "Unauthorized" }));
        }
    }

    #[test]
    fn test_kind_matches_status() {
        let err = AuthError::InvalidToken("expired".into());
        assert_eq!(err.kind().status_code(), err.status_code().as_u16());
    }

    #[test]
    fn test_display_keeps_reason_for_logs() {
        let err = AuthError::InvalidToken("TOKEN_EXPIRED".into());
        assert!(err.to_string().contains("TOKEN_EXPIRED"));
    }
}
