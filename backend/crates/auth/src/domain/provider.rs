//! Identity Provider Trait
//!
//! Interface for token verification. Implementation is in infrastructure layer.

use crate::domain::identity::{BearerToken, VerifiedIdentity};
use crate::error::AuthResult;

/// External identity provider
#[trait_variant::make(IdentityProvider: Send)]
pub trait LocalIdentityProvider {
    /// Verify a token with the provider and return the identity it asserts
    async fn verify(&self, token: &BearerToken) -> AuthResult<VerifiedIdentity>;
}
