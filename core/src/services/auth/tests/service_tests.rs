//! Unit tests for the authentication service

use std::sync::Arc;

use crate::domain::entities::principal::Principal;
use crate::domain::value_objects::BEARER_TOKEN_TYPE;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::services::auth::{AuthService, Credentials, DirectoryAuthenticator};
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> AuthService<DirectoryAuthenticator> {
    let token_service = TokenService::new(TokenServiceConfig::new(
        "auth-service-test-secret-0123456789abcdef",
    ))
    .unwrap();
    AuthService::new(
        DirectoryAuthenticator::new([Principal::demo()]),
        Arc::new(token_service),
    )
}

#[tokio::test]
async fn test_login_issues_bearer_token_for_principal() {
    let service = create_test_service();

    let access = service
        .login(&Credentials::new("Max Den", "Customer"))
        .await
        .unwrap();
    assert_eq!(access.token_type, BEARER_TOKEN_TYPE);

    let claims = service.token_service().verify(&access.access_token).unwrap();
    assert_eq!(claims.subject(), "Max Den");
    assert_eq!(claims.role(), "Customer");
    assert_eq!(claims.claims.data_access.as_deref(), Some("Full"));
    assert_eq!(claims.claims.email.as_deref(), Some("max.den@example.com"));
    assert_eq!(claims.exp - claims.iat, 30 * 60);
}

#[tokio::test]
async fn test_login_rejects_unknown_principal() {
    let service = create_test_service();

    let result = service.login(&Credentials::new("Mallory", "Customer")).await;
    assert!(matches!(result, Err(DomainError::Auth(AuthError::AuthenticationFailed))));
}

#[tokio::test]
async fn test_verify_rejects_garbage() {
    let service = create_test_service();

    let result = service.token_service().verify("garbage");
    assert!(matches!(result, Err(DomainError::Token(TokenError::MalformedToken))));
}
