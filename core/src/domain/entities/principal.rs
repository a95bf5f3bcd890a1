//! Principal entity: an identity the authenticator has vouched for.

use serde::{Deserialize, Serialize};

use super::token::ClaimSet;

/// An authenticated principal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Opaque identity, becomes the `sub` claim
    pub subject: String,

    /// Role, e.g. `Customer`
    pub role: String,

    /// Access level, e.g. `Full`
    #[serde(default)]
    pub data_access: Option<String>,

    /// Contact address
    #[serde(default)]
    pub email: Option<String>,
}

impl Principal {
    pub fn new(subject: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            role: role.into(),
            data_access: None,
            email: None,
        }
    }

    pub fn with_data_access(mut self, data_access: impl Into<String>) -> Self {
        self.data_access = Some(data_access.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// The demonstration principal seeded in development environments
    pub fn demo() -> Self {
        Self::new("Max Den", "Customer")
            .with_data_access("Full")
            .with_email("max.den@example.com")
    }

    /// Role comparison is exact (case-sensitive)
    pub fn has_role(&self, role: &str) -> bool {
        self.role == role
    }

    /// Converts the principal into the claims carried by its access token
    pub fn into_claims(self) -> ClaimSet {
        ClaimSet {
            sub: self.subject,
            role: self.role,
            data_access: self.data_access,
            email: self.email,
            extra: Default::default(),
        }
    }
}
