//! Shared configuration and common types for the Authgate server
//!
//! This crate provides functionality used across the server crates:
//! - Configuration types loaded from the process environment
//! - The error response body returned by the HTTP layer
//! - Configuration loading errors

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, Environment, JwtConfig, LoggingConfig, ServerConfig};
pub use errors::{error_codes, ConfigError, ErrorResponse};
