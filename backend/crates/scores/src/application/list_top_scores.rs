//! List Top Scores Use Case

use std::sync::Arc;

use crate::domain::entities::ScoreEntry;
use crate::domain::repository::ScoreRepository;
use crate::error::{ScoresError, ScoresResult};

/// List top scores use case
pub struct ListTopScoresUseCase<R>
where
    R: ScoreRepository,
{
    repo: Arc<R>,
    limit: u32,
}

impl<R> ListTopScoresUseCase<R>
where
    R: ScoreRepository,
{
    pub fn new(repo: Arc<R>, limit: u32) -> Self {
        Self { repo, limit }
    }

    pub async fn execute(&self) -> ScoresResult<Vec<ScoreEntry>> {
        let entries = self
            .repo
            .top(self.limit)
            .await
            .map_err(|e| ScoresError::ListFailed(e.to_string()))?;

        tracing::debug!(entries = entries.len(), "Leaderboard read");

        Ok(entries)
    }
}
