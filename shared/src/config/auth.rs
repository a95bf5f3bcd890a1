//! Authentication and token signing configuration

use secrecy::SecretString;
use std::path::PathBuf;

use super::parse_var;
use crate::errors::ConfigError;

/// Default access token validity: 30 minutes
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 1800;

/// Default `iss` claim stamped on issued tokens
pub const DEFAULT_ISSUER: &str = "authgate";

/// Default signing algorithm
pub const DEFAULT_ALGORITHM: &str = "HS256";

/// Secret length below which a startup warning is emitted
pub const RECOMMENDED_SECRET_BYTES: usize = 32;

/// Whether `secret` is shorter than [`RECOMMENDED_SECRET_BYTES`]
pub fn is_weak_secret(secret: &str) -> bool {
    secret.len() < RECOMMENDED_SECRET_BYTES
}

/// JWT signing configuration
///
/// The secret never has a built-in fallback: it must be supplied through
/// `JWT_SECRET` (or a `.env` file loaded before this is read).
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: SecretString,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// Algorithm name for JWT signing (HS256, HS384 or HS512)
    pub algorithm: String,
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
            access_token_expiry: DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS,
            issuer: DEFAULT_ISSUER.to_string(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes.saturating_mul(60);
        self
    }

    /// Set the signing algorithm name
    pub fn with_algorithm(mut self, algorithm: impl Into<String>) -> Self {
        self.algorithm = algorithm.into();
        self
    }

    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("JWT_SECRET")
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| ConfigError::missing("JWT_SECRET"))?;

        let access_token_expiry = parse_var(
            &lookup,
            "JWT_ACCESS_TOKEN_EXPIRY",
            DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS,
        )?;
        if access_token_expiry <= 0 {
            return Err(ConfigError::invalid(
                "JWT_ACCESS_TOKEN_EXPIRY",
                "must be a positive number of seconds",
            ));
        }

        Ok(Self {
            secret: SecretString::new(secret),
            access_token_expiry,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
            algorithm: lookup("JWT_ALGORITHM")
                .map(|value| value.trim().to_uppercase())
                .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string()),
        })
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// JSON file listing the principals known to the authenticator
    pub principals_file: Option<PathBuf>,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            jwt: JwtConfig::from_lookup(&lookup)?,
            principals_file: lookup("PRINCIPALS_FILE")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
