//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, TokenError};

use ag_shared::ConfigError;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// Invalid caller input, e.g. a non-positive token validity
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Missing or invalid process configuration; fatal at startup
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True for every failure the HTTP layer reports as 401
    pub fn is_authentication_failure(&self) -> bool {
        match self {
            DomainError::Auth(_) => true,
            DomainError::Token(token_error) => token_error.is_rejection(),
            _ => false,
        }
    }
}

impl From<ConfigError> for DomainError {
    fn from(error: ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failure_classification() {
        assert!(DomainError::from(AuthError::AuthenticationFailed).is_authentication_failure());
        assert!(DomainError::from(TokenError::TokenExpired).is_authentication_failure());
        assert!(DomainError::from(TokenError::MalformedToken).is_authentication_failure());
        assert!(DomainError::from(TokenError::InvalidSignature).is_authentication_failure());

        assert!(!DomainError::from(TokenError::TokenGenerationFailed).is_authentication_failure());
        assert!(!DomainError::validation("bad").is_authentication_failure());
        assert!(!DomainError::configuration("missing").is_authentication_failure());
    }

    #[test]
    fn test_config_error_conversion() {
        let error: DomainError = ConfigError::missing("JWT_SECRET").into();
        assert!(matches!(error, DomainError::Configuration { ref message } if message.contains("JWT_SECRET")));
    }

    #[test]
    fn test_token_error_kind() {
        assert_eq!(TokenError::InvalidSignature.kind(), "invalid_signature");
        assert_eq!(TokenError::TokenExpired.to_string(), "Token expired");
    }
}
