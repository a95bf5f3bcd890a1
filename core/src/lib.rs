//! # Authgate Core
//!
//! Core domain layer for the Authgate backend.
//! This crate contains the claim and principal entities, the token service
//! that signs and verifies access tokens, the authentication collaborator
//! consulted before issuance, and the error types shared by all of them.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{AccessToken, ClaimSet, IssuedClaims, Principal, BEARER_TOKEN_TYPE};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use services::{
    AuthService, Authenticator, Credentials, DirectoryAuthenticator, TokenService,
    TokenServiceConfig,
};
