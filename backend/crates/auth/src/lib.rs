//! Auth (Authentication) Gate
//!
//! Clean Architecture structure:
//! - `domain/` - Bearer token and verified identity, identity provider trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Firebase Identity Toolkit implementation
//! - `presentation/` - Middleware guarding data-returning routes
//!
//! ## Security Model
//! - The service never validates tokens itself; verification is delegated
//!   to the identity provider on every request
//! - A request without a credential is rejected before the provider is
//!   contacted
//! - Every failure (missing, rejected, provider unreachable) produces the
//!   same `403 {"error":"Unauthorized"}` response

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::authenticate::AuthenticateUseCase;
pub use application::config::AuthConfig;
pub use domain::identity::{BearerToken, VerifiedIdentity};
pub use domain::provider::IdentityProvider;
pub use error::{AuthError, AuthResult};
pub use infra::firebase::FirebaseIdentityProvider;
pub use presentation::middleware::{AuthGateState, require_bearer_token};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
