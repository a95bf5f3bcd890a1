//! Access token value object returned by the token endpoint.

use serde::{Deserialize, Serialize};

/// OAuth2-style token type reported alongside every issued token
pub const BEARER_TOKEN_TYPE: &str = "bearer";

/// An issued access token and its type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    /// Signed JWT
    pub access_token: String,

    /// Always `bearer`
    pub token_type: String,
}

impl AccessToken {
    /// Wraps a signed token as a bearer token
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: BEARER_TOKEN_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_serialization() {
        let token = AccessToken::bearer("a.b.c");
        let json = serde_json::to_value(&token).unwrap();

        assert_eq!(json, serde_json::json!({ "access_token": "a.b.c", "token_type": "bearer" }));
    }
}
