//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are the
//! per-crate error types rendered through `kernel::error::AppError`.

mod app;
mod config;

use anyhow::Context;
use auth::FirebaseIdentityProvider;
use scores::{InMemoryScoreRepository, PgScoreRepository};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::{AppDeps, build_router, cors_layer};
use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "match_api=info,auth=info,cards=info,scores=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;

    // Decks are loaded once; a bad deck source stops startup.
    let decks = cards::load_deck_table(&config.decks_path)
        .await
        .with_context(|| format!("Failed to load decks from {}", config.decks_path.display()))?;
    let decks = Arc::new(decks);

    let provider = Arc::new(FirebaseIdentityProvider::new(&config.auth)?);
    let collection = config.scores.collection()?;

    let app = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            let repo = PgScoreRepository::new(pool, &collection);
            repo.ensure_collection().await?;

            tracing::info!(collection = %collection, "Using PostgreSQL score store");

            build_router(AppDeps {
                decks,
                repo: Arc::new(repo),
                provider,
                scores: config.scores.clone(),
                public_dir: config.public_dir.clone(),
            })
        }
        None => {
            tracing::warn!("DATABASE_URL not set, scores are kept in memory and lost on restart");

            build_router(AppDeps {
                decks,
                repo: Arc::new(InMemoryScoreRepository::new()),
                provider,
                scores: config.scores.clone(),
                public_dir: config.public_dir.clone(),
            })
        }
    };

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins));

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
