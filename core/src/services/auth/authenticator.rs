//! Principal authentication collaborator

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entities::principal::Principal;
use crate::errors::{AuthError, DomainError, DomainResult};

/// What a caller presents when asking for a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub subject: String,
    pub role: String,
}

impl Credentials {
    pub fn new(subject: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            role: role.into(),
        }
    }
}

/// Trait for authenticating a principal before a token is issued
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns the authenticated principal, or `AuthError::AuthenticationFailed`
    async fn authenticate(&self, credentials: &Credentials) -> DomainResult<Principal>;
}

/// Authenticator backed by a fixed, in-memory principal directory
///
/// Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct DirectoryAuthenticator {
    principals: HashMap<String, Principal>,
}

impl DirectoryAuthenticator {
    /// Builds a directory from principals; a later duplicate subject replaces an earlier one
    pub fn new(principals: impl IntoIterator<Item = Principal>) -> Self {
        Self {
            principals: principals
                .into_iter()
                .map(|principal| (principal.subject.clone(), principal))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON array of principals
    ///
    /// Duplicate subjects are a configuration error.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let principals: Vec<Principal> = serde_json::from_str(json).map_err(|e| {
            DomainError::configuration(format!("Invalid principal directory: {}", e))
        })?;

        let mut directory = HashMap::with_capacity(principals.len());
        for principal in principals {
            if principal.subject.trim().is_empty() {
                return Err(DomainError::configuration(
                    "Invalid principal directory: empty subject",
                ));
            }
            if directory.contains_key(&principal.subject) {
                return Err(DomainError::configuration(format!(
                    "Invalid principal directory: duplicate subject '{}'",
                    principal.subject
                )));
            }
            directory.insert(principal.subject.clone(), principal);
        }

        Ok(Self {
            principals: directory,
        })
    }

    /// Loads a JSON principal directory from disk
    pub fn from_file(path: &Path) -> DomainResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read principal directory {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.principals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

#[async_trait]
impl Authenticator for DirectoryAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> DomainResult<Principal> {
        match self.principals.get(&credentials.subject) {
            Some(principal) if principal.has_role(&credentials.role) => Ok(principal.clone()),
            _ => {
                tracing::info!("Principal authentication failed");
                Err(DomainError::Auth(AuthError::AuthenticationFailed))
            }
        }
    }
}
