//! Server configuration module

use super::parse_var;
use crate::errors::ConfigError;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
            workers: 0, // Use all CPU cores
        }
    }
}

impl ServerConfig {
    /// Load from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("SERVER_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "SERVER_PORT", defaults.port)?,
            workers: parse_var(&lookup, "SERVER_WORKERS", defaults.workers)?,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_defaults() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_server_config_from_lookup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "SERVER_HOST" => Some("0.0.0.0".to_string()),
            "SERVER_PORT" => Some("9000".to_string()),
            "SERVER_WORKERS" => Some("4".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn test_server_config_rejects_invalid_port() {
        let result = ServerConfig::from_lookup(|key| {
            (key == "SERVER_PORT").then(|| "http".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidValue { name, .. }) if name == "SERVER_PORT"));
    }
}
