//! Game Board Controller
//!
//! - `game` - the board state machine, no I/O
//! - `session` - drives one game against the backend
//! - `client` - typed HTTP client for the backend API

pub mod client;
pub mod error;
pub mod game;
pub mod session;

pub use client::{GameApiClient, LeaderboardEntry, format_leaderboard};
pub use error::{BoardError, BoardResult};
pub use game::{BoardCard, CardFace, FlipOutcome, GameBoard};
pub use session::{CompletionSummary, GameSession, TurnResult};
