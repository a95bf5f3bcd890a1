//! Error types for authentication and token handling
//!
//! Each variant is a distinct failure inside the core. The HTTP layer collapses
//! every authentication failure into one generic response, so the detail here
//! is for logs and tests only.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown principal or a role that does not match the directory.
    /// The two cases are not distinguished.
    #[error("Authentication failed")]
    AuthenticationFailed,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    /// Short machine-readable name, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            TokenError::TokenExpired => "token_expired",
            TokenError::MalformedToken => "malformed_token",
            TokenError::InvalidSignature => "invalid_signature",
            TokenError::TokenGenerationFailed => "token_generation_failed",
        }
    }

    /// Whether this error means the presented token must be rejected
    pub fn is_rejection(&self) -> bool {
        !matches!(self, TokenError::TokenGenerationFailed)
    }
}
