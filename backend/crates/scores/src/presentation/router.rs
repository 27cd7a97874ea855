//! Scores Router

use auth::IdentityProvider;
use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::ScoresConfig;
use crate::domain::repository::ScoreRepository;
use crate::presentation::handlers::{self, ScoresAppState};

/// Create the Scores router for any repository and identity provider,
/// mounted at `/scores`
pub fn scores_router<R, P>(repo: Arc<R>, provider: Arc<P>, config: ScoresConfig) -> Router
where
    R: ScoreRepository + Send + Sync + 'static,
    P: IdentityProvider + Send + Sync + 'static,
{
    let state = ScoresAppState {
        repo,
        provider,
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_top_scores::<R, P>).post(handlers::record_score::<R, P>),
        )
        .route("/{score}", get(handlers::rank_score::<R, P>))
        .with_state(state)
}
