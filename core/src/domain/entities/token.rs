//! Claim entities carried inside signed access tokens.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Claim names owned by the token service; callers may not set them as extra claims
pub const RESERVED_CLAIMS: [&str; 7] = ["sub", "role", "data_access", "email", "iat", "exp", "iss"];

/// Claims supplied by the caller when a token is issued
///
/// Serializes flat: the named fields and every entry of `extra` become
/// top-level keys of the token payload. `extra` is a `BTreeMap` so the
/// encoded payload has a stable key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Subject (opaque principal identity)
    pub sub: String,

    /// Principal role, e.g. `Customer`
    pub role: String,

    /// Access level granted to the principal, e.g. `Full`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_access: Option<String>,

    /// Contact address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Any additional claims
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ClaimSet {
    /// Creates a claim set with the mandatory subject and role
    pub fn new(sub: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            sub: sub.into(),
            role: role.into(),
            data_access: None,
            email: None,
            extra: BTreeMap::new(),
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

    /// Adds an extra claim, replacing any previous value under the same name
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Returns the first extra claim whose name collides with a reserved claim
    pub fn reserved_claim(&self) -> Option<&str> {
        self.extra
            .keys()
            .map(String::as_str)
            .find(|name| RESERVED_CLAIMS.contains(name))
    }
}

/// The full payload of an issued token: caller claims plus registered claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedClaims {
    #[serde(flatten)]
    pub claims: ClaimSet,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,
}

impl IssuedClaims {
    pub fn subject(&self) -> &str {
        &self.claims.sub
    }

    pub fn role(&self) -> &str {
        &self.claims.role
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Checks whether `now` is strictly past the expiry instant
    ///
    /// An unrepresentable expiry counts as expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at() {
            Some(expires_at) => now > expires_at,
            None => true,
        }
    }
}
