//! Auth Middleware
//!
//! Middleware for requiring a verified bearer token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::{extract_authorization_token, extract_client_ip};
use std::sync::Arc;

use crate::application::authenticate::AuthenticateUseCase;
use crate::domain::provider::IdentityProvider;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthGateState<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    pub provider: Arc<P>,
}

impl<P> AuthGateState<P>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

/// Middleware that requires a token the identity provider accepts
///
/// Install with `axum::middleware::from_fn_with_state`.
pub async fn require_bearer_token<P>(
    State(state): State<AuthGateState<P>>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError>
where
    P: IdentityProvider + Clone + Send + Sync + 'static,
{
    let direct_ip = req
        .extensions()
        .get::<axum::extract::ConnectInfo<std::net::SocketAddr>>()
        .map(|info| info.0.ip());
    let client_ip = extract_client_ip(req.headers(), direct_ip);
    // Owned copies so no borrow of the request is held across the await.
    let raw_token = extract_authorization_token(req.headers()).map(str::to_owned);
    let path = req.uri().path().to_owned();

    let use_case = AuthenticateUseCase::new(state.provider.clone());
    let verified = use_case.execute(raw_token.as_deref()).await;

    match verified {
        Ok(identity) => {
            tracing::debug!(
                user_id = %identity.user_id,
                path = %path,
                "Request authenticated"
            );
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::info!(
                client_ip = ?client_ip,
                path = %path,
                "Rejected unauthenticated request"
            );
            Err(e)
        }
    }
}
