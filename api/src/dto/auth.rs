use ag_core::services::auth::Credentials;
use ag_core::AccessToken;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TokenRequest {
    /// Principal identity, e.g. "Max Den"
    #[validate(length(min = 1, max = 128))]
    pub subject: String,

    /// Requested role, e.g. "Customer"
    #[validate(length(min = 1, max = 128))]
    pub role: String,
}

impl TokenRequest {
    pub fn into_credentials(self) -> Credentials {
        Credentials::new(self.subject, self.role)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String, // always "bearer"
}

impl From<AccessToken> for TokenResponse {
    fn from(token: AccessToken) -> Self {
        Self {
            access_token: token.access_token,
            token_type: token.token_type,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_validation() {
        let valid = TokenRequest {
            subject: "Max Den".to_string(),
            role: "Customer".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty_subject = TokenRequest {
            subject: String::new(),
            role: "Customer".to_string(),
        };
        let errors = empty_subject.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("subject"));

        let long_role = TokenRequest {
            subject: "u1".to_string(),
            role: "x".repeat(129),
        };
        assert!(long_role.validate().is_err());
    }

    #[test]
    fn test_token_response_from_access_token() {
        let response = TokenResponse::from(AccessToken::bearer("a.b.c"));
        assert_eq!(response.access_token, "a.b.c");
        assert_eq!(response.token_type, "bearer");
    }
}
