//! Startup configuration for the API binary
//!
//! Everything is read once, before the server starts. The resulting services
//! are immutable and shared across workers.

use ag_core::errors::DomainResult;
use ag_core::services::auth::DirectoryAuthenticator;
use ag_core::services::token::{TokenService, TokenServiceConfig};
use ag_core::Principal;
use ag_shared::config::{AppConfig, Environment};
use ag_shared::ConfigError;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
}

impl Config {
    /// Loads `.env` (if present) and then the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(Self {
            app: AppConfig::from_env()?,
        })
    }

    pub fn from_app_config(app: AppConfig) -> Self {
        Self { app }
    }

    pub fn environment(&self) -> Environment {
        self.app.environment
    }

    pub fn bind_address(&self) -> String {
        self.app.server.bind_address()
    }

    /// Worker count, `None` means actix-web's default (one per CPU core)
    pub fn workers(&self) -> Option<usize> {
        match self.app.server.workers {
            0 => None,
            n => Some(n),
        }
    }

    /// Filter applied when `RUST_LOG` is unset
    pub fn default_log_filter(&self) -> &str {
        &self.app.logging.level
    }

    /// Builds the process-wide token service
    pub fn token_service(&self) -> DomainResult<TokenService> {
        let config = TokenServiceConfig::from_jwt_config(&self.app.auth.jwt)?;
        TokenService::new(config)
    }

    /// Builds the principal directory
    ///
    /// `PRINCIPALS_FILE` wins when set. Otherwise development seeds the
    /// demonstration principal and every other environment starts empty.
    pub fn authenticator(&self) -> DomainResult<DirectoryAuthenticator> {
        if let Some(path) = &self.app.auth.principals_file {
            let directory = DirectoryAuthenticator::from_file(path)?;
            log::info!(
                "Loaded {} principal(s) from {}",
                directory.len(),
                path.display()
            );
            return Ok(directory);
        }

        if self.environment().is_development() {
            log::warn!("PRINCIPALS_FILE not set; seeding the demonstration principal");
            Ok(DirectoryAuthenticator::new([Principal::demo()]))
        } else {
            log::warn!("PRINCIPALS_FILE not set; token issuance will reject every principal");
            Ok(DirectoryAuthenticator::empty())
        }
    }
}
