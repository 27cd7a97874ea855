//! Repository Traits
//!
//! Interfaces for score persistence. Implementations are in the
//! infrastructure layer.

use crate::domain::entities::ScoreEntry;
use crate::error::ScoresResult;

/// Score store trait
#[trait_variant::make(ScoreRepository: Send)]
pub trait LocalScoreRepository {
    /// Append a new entry
    async fn create(&self, entry: &ScoreEntry) -> ScoresResult<()>;

    /// Lowest scores first, ties by insertion, at most `limit` entries
    async fn top(&self, limit: u32) -> ScoresResult<Vec<ScoreEntry>>;

    /// Every stored score, ascending
    async fn scores_ascending(&self) -> ScoresResult<Vec<i64>>;
}
