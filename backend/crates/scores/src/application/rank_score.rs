//! Rank Score Use Case

use std::sync::Arc;

use crate::domain::repository::ScoreRepository;
use crate::domain::services::rank_of;
use crate::domain::value_objects::{Rank, RankLookup};
use crate::error::{ScoresError, ScoresResult};

/// Rank score use case
pub struct RankScoreUseCase<R>
where
    R: ScoreRepository,
{
    repo: Arc<R>,
}

impl<R> RankScoreUseCase<R>
where
    R: ScoreRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Rank of a stored score
    pub async fn lookup(&self, score: i64) -> ScoresResult<RankLookup> {
        let scores = self.repo.scores_ascending().await?;
        Ok(rank_of(&scores, score))
    }

    /// Rank of a score given as caller text
    ///
    /// Non-integer input, a score nobody holds, and store failures all fail
    /// with `RankUnavailable`.
    pub async fn execute(&self, raw_score: &str) -> ScoresResult<Rank> {
        let score: i64 = raw_score
            .trim()
            .parse()
            .map_err(|_| ScoresError::RankUnavailable(format!("not an integer: {raw_score:?}")))?;

        let lookup = self
            .lookup(score)
            .await
            .map_err(|e| ScoresError::RankUnavailable(e.to_string()))?;

        match lookup {
            RankLookup::Ranked(rank) => {
                tracing::debug!(score, rank = rank.get(), "Score ranked");
                Ok(rank)
            }
            RankLookup::Unranked => Err(ScoresError::RankUnavailable(format!(
                "no entry with score {score}"
            ))),
        }
    }
}
