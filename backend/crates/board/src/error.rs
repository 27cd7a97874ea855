//! Board Error Types

use thiserror::Error;

/// Board-specific result type alias
pub type BoardResult<T> = Result<T, BoardError>;

/// Board-specific error variants
#[derive(Debug, Error)]
pub enum BoardError {
    /// No card with this board id
    #[error("Unknown card: {0}")]
    UnknownCard(String),

    /// Backend replied with a non-success status
    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Request could not be sent or the reply could not be decoded
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Client could not be constructed
    #[error(transparent)]
    Client(#[from] platform::http_client::HttpClientError),
}
