//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::value_objects::AccessToken;
use crate::errors::DomainResult;
use crate::services::token::TokenService;

use super::authenticator::{Authenticator, Credentials};

/// Authentication service composing the authenticator with the token service
pub struct AuthService<A>
where
    A: Authenticator,
{
    /// Collaborator that vouches for principals
    authenticator: A,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
}

impl<A> AuthService<A>
where
    A: Authenticator,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `authenticator` - Collaborator that authenticates principals
    /// * `token_service` - Shared token service
    pub fn new(authenticator: A, token_service: Arc<TokenService>) -> Self {
        Self {
            authenticator,
            token_service,
        }
    }

    /// Authenticates the caller and issues a bearer token for the principal
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - Signed token valid for the configured default validity
    /// * `Err(AuthError::AuthenticationFailed)` - The authenticator rejected the credentials
    pub async fn login(&self, credentials: &Credentials) -> DomainResult<AccessToken> {
        let principal = self.authenticator.authenticate(credentials).await?;
        let token = self.token_service.issue_default(principal.into_claims())?;
        Ok(AccessToken::bearer(token))
    }

    pub fn token_service(&self) -> &Arc<TokenService> {
        &self.token_service
    }
}
