//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and authentication configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server configuration
//!
//! Every section is read once at startup; nothing here is mutated afterwards.

pub mod auth;
pub mod environment;
pub mod server;

use std::fmt::Display;
use std::str::FromStr;

use crate::errors::ConfigError;

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use environment::{Environment, LoggingConfig};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_lookup(&lookup);
        Ok(Self {
            environment,
            server: ServerConfig::from_lookup(&lookup)?,
            auth: AuthConfig::from_lookup(&lookup)?,
            logging: LoggingConfig::for_environment(environment),
        })
    }
}

/// Parse an optional variable, falling back to `default` when unset
pub(crate) fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::invalid(name, e.to_string())),
        None => Ok(default),
    }
}
