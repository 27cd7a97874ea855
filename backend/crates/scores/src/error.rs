//! Scores Error Types
//!
//! This module provides leaderboard-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Each variant carries
//! its cause for the logs; callers only ever see the fixed public message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Scores-specific result type alias
pub type ScoresResult<T> = Result<T, ScoresError>;

/// Scores-specific error variants
#[derive(Debug, Error)]
pub enum ScoresError {
    /// Submission body has no integer `score`
    #[error("No score received in request")]
    MissingScore,

    /// Submitter could not be verified, or the entry could not be written
    #[error("Unable to record score: {0}")]
    RecordFailed(String),

    /// Leaderboard could not be read
    #[error("Error getting scores: {0}")]
    ListFailed(String),

    /// Score is not on the leaderboard, or ranks could not be computed
    #[error("Unable to get score: {0}")]
    RankUnavailable(String),

    /// Configured collection name cannot be used as a table name
    #[error("Invalid collection name {0:?}")]
    InvalidCollection(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ScoresError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ScoresError::RecordFailed(_) | ScoresError::RankUnavailable(_) => {
                StatusCode::BAD_REQUEST
            }
            ScoresError::MissingScore
            | ScoresError::ListFailed(_)
            | ScoresError::InvalidCollection(_)
            | ScoresError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScoresError::RecordFailed(_) | ScoresError::RankUnavailable(_) => {
                ErrorKind::BadRequest
            }
            ScoresError::MissingScore
            | ScoresError::ListFailed(_)
            | ScoresError::InvalidCollection(_)
            | ScoresError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Message the caller sees
    pub fn public_message(&self) -> &'static str {
        match self {
            ScoresError::MissingScore => "No score received in request",
            ScoresError::RecordFailed(_) => "Unable to record score",
            ScoresError::ListFailed(_) => "Error getting scores",
            ScoresError::RankUnavailable(_) => "Unable to get score",
            ScoresError::InvalidCollection(_) | ScoresError::Database(_) => {
                self.kind().as_str()
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.public_message())
    }

    fn log(&self) {
        match self {
            ScoresError::MissingScore => {
                tracing::info!("Score submission without a score");
            }
            ScoresError::RecordFailed(reason) => {
                tracing::warn!(error = %reason, "Unable to record score");
            }
            ScoresError::RankUnavailable(reason) => {
                tracing::info!(error = %reason, "Unable to get score");
            }
            ScoresError::ListFailed(reason) => {
                tracing::error!(error = %reason, "Error getting scores");
            }
            ScoresError::Database(e) => {
                tracing::error!(error = %e, "Scores database error");
            }
            ScoresError::InvalidCollection(name) => {
                tracing::error!(collection = %name, "Invalid collection name");
            }
        }
    }
}

impl IntoResponse for ScoresError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ScoresError::MissingScore.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ScoresError::RecordFailed("token rejected".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ScoresError::ListFailed("timeout".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ScoresError::RankUnavailable("unranked".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_kind_matches_status() {
        let errors = [
            ScoresError::MissingScore,
            ScoresError::RecordFailed("x".into()),
            ScoresError::ListFailed("x".into()),
            ScoresError::RankUnavailable("x".into()),
            ScoresError::InvalidCollection("x y".into()),
        ];
        for err in errors {
            assert_eq!(err.kind().status_code(), err.status_code().as_u16());
        }
    }

    #[tokio::test]
    async fn test_cause_is_not_returned() {
        let response = ScoresError::RecordFailed("connection reset by peer".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Unable to record score" }));
    }
}
