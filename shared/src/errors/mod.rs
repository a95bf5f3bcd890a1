//! Shared error types and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised while loading configuration from the environment
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration variable: {name}")]
    MissingVariable { name: String },

    #[error("Invalid value for configuration variable {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ConfigError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Common error codes used across the application
pub mod error_codes {
    pub const UNAUTHORIZED: &str = "unauthorized";
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const NOT_FOUND: &str = "not_found";
    pub const INTERNAL_ERROR: &str = "internal_error";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_without_details_omits_field() {
        let response = ErrorResponse::new(error_codes::UNAUTHORIZED, "Authentication required");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["error"], "unauthorized");
        assert_eq!(json["message"], "Authentication required");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_error_response_add_detail() {
        let response = ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request")
            .add_detail("field", "subject");

        let details = response.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "subject");
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::missing("JWT_SECRET").to_string(),
            "Missing required configuration variable: JWT_SECRET"
        );
        assert_eq!(
            ConfigError::invalid("SERVER_PORT", "not a number").to_string(),
            "Invalid value for configuration variable SERVER_PORT: not a number"
        );
    }
}
