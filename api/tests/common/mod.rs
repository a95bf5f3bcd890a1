//! Shared fixtures for API integration tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use ag_api::routes::auth::AppState;
use ag_core::services::auth::{AuthService, DirectoryAuthenticator};
use ag_core::services::token::{TokenService, TokenServiceConfig};
use ag_core::Principal;

pub const TEST_SECRET: &str = "api-test-signing-secret-0123456789abcdef";

pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)).unwrap())
}

pub fn app_state() -> web::Data<AppState<DirectoryAuthenticator>> {
    app_state_with(token_service())
}

pub fn app_state_with(
    token_service: Arc<TokenService>,
) -> web::Data<AppState<DirectoryAuthenticator>> {
    let directory = DirectoryAuthenticator::new([Principal::demo()]);
    let auth_service = Arc::new(AuthService::new(directory, token_service));
    web::Data::new(AppState::new(auth_service))
}
