//! Configuration for the token service

use std::str::FromStr;

use ag_shared::config::auth::{JwtConfig, DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS, DEFAULT_ISSUER};
use chrono::Duration;
use jsonwebtoken::Algorithm;
use secrecy::SecretString;

use crate::errors::DomainError;

/// Configuration for the token service
///
/// There is no `Default`: a signing secret has to be supplied explicitly.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: SecretString,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Validity used when the caller does not pass one
    pub access_token_expiry: Duration,
    /// Value of the `iss` claim
    pub issuer: String,
}

impl TokenServiceConfig {
    /// Creates a configuration with HS256, the default validity and the default issuer
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
            algorithm: Algorithm::HS256,
            access_token_expiry: Duration::seconds(DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS),
            issuer: DEFAULT_ISSUER.to_string(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_access_token_expiry(mut self, expiry: Duration) -> Self {
        self.access_token_expiry = expiry;
        self
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = issuer.into();
        self
    }

    /// Builds the token service configuration from the shared JWT settings
    pub fn from_jwt_config(jwt: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&jwt.algorithm).map_err(|_| {
            DomainError::configuration(format!("Unknown JWT algorithm: {}", jwt.algorithm))
        })?;

        let access_token_expiry = Duration::try_seconds(jwt.access_token_expiry).ok_or_else(|| {
            DomainError::configuration(format!(
                "Access token expiry of {} seconds is out of range",
                jwt.access_token_expiry
            ))
        })?;

        Ok(Self {
            jwt_secret: jwt.secret.clone(),
            algorithm,
            access_token_expiry,
            issuer: jwt.issuer.clone(),
        })
    }
}
