//! Record Score Use Case
//!
//! The submitter is derived from the caller's token, verified here again
//! independently of the gate in front of the route.

use auth::{AuthError, AuthenticateUseCase, IdentityProvider};
use kernel::id::ScoreEntryId;
use std::sync::Arc;

use crate::application::rank_score::RankScoreUseCase;
use crate::domain::entities::ScoreEntry;
use crate::domain::repository::ScoreRepository;
use crate::domain::value_objects::{Rank, RankLookup};
use crate::error::{ScoresError, ScoresResult};

/// Record score input
pub struct RecordScoreInput {
    /// `None` when the body had no integer score
    pub score: Option<i64>,
    /// Raw authorization credential
    pub token: Option<String>,
}

/// Record score output
#[derive(Debug)]
pub struct RecordScoreOutput {
    pub entry_id: ScoreEntryId,
    /// Rank right after the write; `None` if it could not be computed
    pub rank: Option<Rank>,
}

/// Record score use case
pub struct RecordScoreUseCase<R, P>
where
    R: ScoreRepository,
    P: IdentityProvider,
{
    repo: Arc<R>,
    provider: Arc<P>,
}

impl<R, P> RecordScoreUseCase<R, P>
where
    R: ScoreRepository,
    P: IdentityProvider,
{
    pub fn new(repo: Arc<R>, provider: Arc<P>) -> Self {
        Self { repo, provider }
    }

    pub async fn execute(&self, input: RecordScoreInput) -> ScoresResult<RecordScoreOutput> {
        let score = input.score.ok_or(ScoresError::MissingScore)?;

        let identity = AuthenticateUseCase::new(self.provider.clone())
            .execute(input.token.as_deref())
            .await
            .map_err(|e| ScoresError::RecordFailed(e.to_string()))?;

        let name = identity
            .first_name()
            .ok_or_else(|| {
                ScoresError::RecordFailed(AuthError::IncompleteIdentity("display name").to_string())
            })?
            .to_string();

        let entry = ScoreEntry::new(name, identity.email, identity.user_id, score);

        self.repo
            .create(&entry)
            .await
            .map_err(|e| ScoresError::RecordFailed(e.to_string()))?;

        tracing::info!(
            score_entry_id = %entry.id,
            score,
            "Score recorded"
        );

        // The entry is already stored; a failed rank lookup only drops the rank.
        let rank = match RankScoreUseCase::new(self.repo.clone()).lookup(score).await {
            Ok(RankLookup::Ranked(rank)) => Some(rank),
            Ok(RankLookup::Unranked) => {
                tracing::warn!(score_entry_id = %entry.id, "Recorded score missing from ranking");
                None
            }
            Err(e) => {
                tracing::warn!(score_entry_id = %entry.id, error = %e, "Rank lookup failed after write");
                None
            }
        };

        Ok(RecordScoreOutput {
            entry_id: entry.id,
            rank,
        })
    }
}
