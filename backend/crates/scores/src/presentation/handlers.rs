//! HTTP Handlers

use auth::IdentityProvider;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use platform::client::extract_authorization_token;
use std::sync::Arc;

use crate::application::config::ScoresConfig;
use crate::application::{
    ListTopScoresUseCase, RankScoreUseCase, RecordScoreInput, RecordScoreUseCase,
};
use crate::domain::repository::ScoreRepository;
use crate::error::ScoresResult;
use crate::presentation::dto::{
    RankResponse, RecordScoreRequest, RecordScoreResponse, TopScoresResponse,
};

/// Shared state for score handlers
pub struct ScoresAppState<R, P>
where
    R: ScoreRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub provider: Arc<P>,
    pub config: Arc<ScoresConfig>,
}

// Manual impl so neither the repository nor the provider must be `Clone`.
impl<R, P> Clone for ScoresAppState<R, P>
where
    R: ScoreRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            provider: self.provider.clone(),
            config: self.config.clone(),
        }
    }
}

// ============================================================================
// Leaderboard
// ============================================================================

/// GET /scores
pub async fn list_top_scores<R, P>(
    State(state): State<ScoresAppState<R, P>>,
) -> ScoresResult<Json<TopScoresResponse>>
where
    R: ScoreRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = ListTopScoresUseCase::new(state.repo.clone(), state.config.leaderboard_size);
    let entries = use_case.execute().await?;

    Ok(Json(TopScoresResponse {
        scores: entries.into_iter().map(Into::into).collect(),
    }))
}

// ============================================================================
// Rank
// ============================================================================

/// GET /scores/{score}
pub async fn rank_score<R, P>(
    State(state): State<ScoresAppState<R, P>>,
    Path(score): Path<String>,
) -> ScoresResult<Json<RankResponse>>
where
    R: ScoreRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let use_case = RankScoreUseCase::new(state.repo.clone());
    let rank = use_case.execute(&score).await?;

    Ok(Json(RankResponse { rank: rank.get() }))
}

// ============================================================================
// Record
// ============================================================================

/// POST /scores
///
/// The body is read raw so that a missing or malformed body reports the
/// missing score rather than an extractor rejection.
pub async fn record_score<R, P>(
    State(state): State<ScoresAppState<R, P>>,
    headers: HeaderMap,
    body: Bytes,
) -> ScoresResult<Json<RecordScoreResponse>>
where
    R: ScoreRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let input = RecordScoreInput {
        score: RecordScoreRequest::score_from_body(&body),
        token: extract_authorization_token(&headers).map(str::to_owned),
    };

    let use_case = RecordScoreUseCase::new(state.repo.clone(), state.provider.clone());
    let output = use_case.execute(input).await?;

    if let Some(rank) = output.rank {
        tracing::info!(score_entry_id = %output.entry_id, rank = rank.get(), "Score ranked");
    }

    Ok(Json(RecordScoreResponse {
        rank: output.rank.map(|rank| rank.get()),
    }))
}
