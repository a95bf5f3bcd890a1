//! Authentication service module
//!
//! This module provides the issuance flow behind the token endpoint:
//! - The `Authenticator` collaborator that vouches for a principal
//! - An in-memory principal directory implementation
//! - `AuthService`, which authenticates and then issues an access token

mod authenticator;
mod service;

#[cfg(test)]
mod tests;

pub use authenticator::{Authenticator, Credentials, DirectoryAuthenticator};
pub use service::AuthService;
