//! Cards Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Cards-specific result type alias
pub type CardsResult<T> = Result<T, CardsError>;

/// Cards-specific error variants
#[derive(Debug, Error)]
pub enum CardsError {
    /// Requested deck name is not one of the known decks
    #[error("Deck not found")]
    DeckNotFound(String),

    /// Deck source content violates a deck invariant
    #[error("Invalid deck {deck}: {reason}")]
    InvalidDeck { deck: String, reason: String },

    /// Deck source could not be read
    #[error("Failed to read deck source: {0}")]
    Source(#[from] std::io::Error),

    /// Deck source is not valid deck JSON
    #[error("Failed to parse deck source: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CardsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CardsError::DeckNotFound(_) => StatusCode::BAD_REQUEST,
            CardsError::InvalidDeck { .. } | CardsError::Source(_) | CardsError::Parse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CardsError::DeckNotFound(_) => ErrorKind::BadRequest,
            CardsError::InvalidDeck { .. } | CardsError::Source(_) | CardsError::Parse(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError; source details stay in the logs
    pub fn to_app_error(&self) -> AppError {
        match self {
            CardsError::DeckNotFound(_) => AppError::bad_request(self.to_string()),
            _ => AppError::internal(self.kind().as_str()),
        }
    }

    fn log(&self) {
        match self {
            CardsError::DeckNotFound(requested) => {
                tracing::info!(deck = %requested, "Deck not found");
            }
            _ => {
                tracing::error!(error = %self, "Deck store error");
            }
        }
    }
}

impl IntoResponse for CardsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
