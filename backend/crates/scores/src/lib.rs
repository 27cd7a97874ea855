//! Scores (Leaderboard) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Score entries, ranks, repository trait, rank calculation
//! - `application/` - Record, list and rank use cases
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers and router
//!
//! Lower scores are better. Entries are append-only; a rank is derived on
//! every query and is not stable under concurrent submissions.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::ScoresConfig;
pub use domain::entities::ScoreEntry;
pub use domain::repository::ScoreRepository;
pub use domain::value_objects::{CollectionName, Rank, RankLookup};
pub use error::{ScoresError, ScoresResult};
pub use infra::memory::InMemoryScoreRepository;
pub use infra::postgres::PgScoreRepository;
pub use presentation::router::scores_router;
