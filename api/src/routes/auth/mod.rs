//! Authentication route handlers
//!
//! - `POST /token` issues a bearer token for an authenticated principal
//! - `GET /me` echoes the verified claims of the presented token

pub mod me;
pub mod token;

use ag_core::services::auth::{AuthService, Authenticator};
use std::sync::Arc;

/// Application state that holds shared services
pub struct AppState<A>
where
    A: Authenticator,
{
    pub auth_service: Arc<AuthService<A>>,
}

impl<A> AppState<A>
where
    A: Authenticator,
{
    pub fn new(auth_service: Arc<AuthService<A>>) -> Self {
        Self { auth_service }
    }
}
