//! Authenticate Use Case
//!
//! Turns the raw authorization header value into a verified identity.

use std::sync::Arc;

use crate::domain::identity::{BearerToken, VerifiedIdentity};
use crate::domain::provider::IdentityProvider;
use crate::error::{AuthError, AuthResult};

/// Authenticate use case
pub struct AuthenticateUseCase<P>
where
    P: IdentityProvider,
{
    provider: Arc<P>,
}

impl<P> AuthenticateUseCase<P>
where
    P: IdentityProvider,
{
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Verify the credential, if any.
    ///
    /// A missing or blank credential fails with `MissingToken` and the
    /// provider is not called.
    pub async fn execute(&self, raw_token: Option<&str>) -> AuthResult<VerifiedIdentity> {
        let token = raw_token
            .and_then(BearerToken::parse)
            .ok_or(AuthError::MissingToken)?;

        self.provider.verify(&token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingProvider {
        calls: AtomicUsize,
    }

    impl IdentityProvider for CountingProvider {
        async fn verify(&self, token: &BearerToken) -> AuthResult<VerifiedIdentity> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if token.expose() == "good" {
                Ok(VerifiedIdentity {
                    user_id: "uid".into(),
                    email: None,
                    display_name: Some("Test Player".into()),
                })
            } else {
                Err(AuthError::InvalidToken("INVALID_ID_TOKEN".into()))
            }
        }
    }

    #[tokio::test]
    async fn test_missing_token_skips_provider() {
        let provider = Arc::new(CountingProvider::default());
        let use_case = AuthenticateUseCase::new(provider.clone());

        let result = use_case.execute(None).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));

        let result = use_case.execute(Some("   ")).await;
        assert!(matches!(result, Err(AuthError::MissingToken)));

        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_token_is_delegated() {
        let provider = Arc::new(CountingProvider::default());
        let use_case = AuthenticateUseCase::new(provider.clone());

        let identity = use_case.execute(Some("good")).await.unwrap();
        assert_eq!(identity.user_id, "uid");

        let result = use_case.execute(Some("bad")).await;
        assert!(matches!(result, Err(AuthError::InvalidToken(_))));

        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }
}
