//! Router Assembly

use auth::{AuthGateState, IdentityProvider, require_bearer_token};
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use cards::{DeckTable, cards_router};
use scores::{ScoreRepository, ScoresConfig, scores_router};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;

/// Everything the routes need, built once in `main`
pub struct AppDeps<R, P> {
    pub decks: Arc<DeckTable>,
    pub repo: Arc<R>,
    pub provider: Arc<P>,
    pub scores: ScoresConfig,
    pub public_dir: PathBuf,
}

/// `/cards` and `/scores` behind the auth gate; every other path is a
/// static file from the public directory, served without auth.
pub fn build_router<R, P>(deps: AppDeps<R, P>) -> Router
where
    R: ScoreRepository + Send + Sync + 'static,
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let gate = middleware::from_fn_with_state(
        AuthGateState::new(deps.provider.clone()),
        require_bearer_token::<P>,
    );

    Router::new()
        .nest("/cards", cards_router(deps.decks).route_layer(gate.clone()))
        .nest(
            "/scores",
            scores_router(deps.repo, deps.provider, deps.scores).route_layer(gate),
        )
        .fallback_service(ServeDir::new(deps.public_dir))
}

pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}
