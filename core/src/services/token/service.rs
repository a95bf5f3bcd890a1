//! Main token service implementation

use std::fmt;

use ag_shared::config::auth::{is_weak_secret, RECOMMENDED_SECRET_BYTES};
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;

use crate::domain::entities::token::{ClaimSet, IssuedClaims};
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service that signs and verifies access tokens
///
/// Immutable once built; share it behind an `Arc` across request handlers.
pub struct TokenService {
    algorithm: Algorithm,
    default_validity: Duration,
    issuer: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or `DomainError::Configuration` when the secret is
    /// missing, the algorithm is not an HMAC algorithm, or the default validity
    /// is shorter than one second
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        let secret = config.jwt_secret.expose_secret();
        if secret.trim().is_empty() {
            return Err(DomainError::configuration(
                "JWT signing secret is not configured",
            ));
        }

        if !matches!(
            config.algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(DomainError::configuration(format!(
                "Unsupported JWT algorithm {:?}: expected HS256, HS384 or HS512",
                config.algorithm
            )));
        }

        if config.access_token_expiry < Duration::seconds(1) {
            return Err(DomainError::configuration(
                "Access token expiry must be at least one second",
            ));
        }

        if is_weak_secret(secret) {
            tracing::warn!(
                recommended_bytes = RECOMMENDED_SECRET_BYTES,
                "JWT signing secret is shorter than recommended"
            );
        }

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_required_spec_claims(&["exp", "iss"]);
        validation.set_issuer(&[config.issuer.as_str()]);
        // Expiry is compared against the caller-supplied instant in `verify_at`
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        tracing::info!(
            algorithm = ?config.algorithm,
            default_validity_seconds = config.access_token_expiry.num_seconds(),
            issuer = %config.issuer,
            "Token service initialized"
        );

        Ok(Self {
            algorithm: config.algorithm,
            default_validity: config.access_token_expiry,
            issuer: config.issuer,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Validity applied by [`TokenService::issue_default`]
    pub fn default_validity(&self) -> Duration {
        self.default_validity
    }

    /// Issues a signed token for `claims`, valid for `validity` from now
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed token
    /// * `Err(DomainError::Validation)` - Validity under one second, or a reserved claim in `claims.extra`
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn issue(&self, claims: ClaimSet, validity: Duration) -> DomainResult<String> {
        self.issue_at(claims, validity, Utc::now())
    }

    /// Issues a signed token with the configured default validity
    pub fn issue_default(&self, claims: ClaimSet) -> DomainResult<String> {
        self.issue(claims, self.default_validity)
    }

    /// Issues a signed token as if the current time were `now`
    ///
    /// Timestamps have one-second granularity; sub-second parts of `validity`
    /// are dropped so that `exp - iat` is exactly the whole-second validity.
    pub fn issue_at(
        &self,
        claims: ClaimSet,
        validity: Duration,
        now: DateTime<Utc>,
    ) -> DomainResult<String> {
        let validity_seconds = validity.num_seconds();
        if validity_seconds < 1 {
            return Err(DomainError::validation(
                "Token validity must be at least one second",
            ));
        }

        if let Some(name) = claims.reserved_claim() {
            return Err(DomainError::validation(format!(
                "Claim '{}' is reserved and cannot be supplied",
                name
            )));
        }

        let iat = now.timestamp();
        let exp = iat
            .checked_add(validity_seconds)
            .filter(|exp| Utc.timestamp_opt(*exp, 0).single().is_some())
            .ok_or_else(|| DomainError::validation("Token validity is out of range"))?;

        let issued = IssuedClaims {
            claims,
            iat,
            exp,
            iss: self.issuer.clone(),
        };

        let token = self.encode_jwt(&issued)?;
        tracing::debug!(expires_at = exp, "Issued access token");
        Ok(token)
    }

    /// Encodes claims into a JWT
    fn encode_jwt(&self, claims: &IssuedClaims) -> DomainResult<String> {
        let header = Header::new(self.algorithm);
        encode(&header, claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Verifies a token and returns its claims
    ///
    /// # Arguments
    ///
    /// * `token` - A token of unknown origin
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedClaims)` - The decoded claims, including `exp`
    /// * `Err(TokenError::MalformedToken)` - Not a parseable token
    /// * `Err(TokenError::InvalidSignature)` - Tampered token or wrong secret
    /// * `Err(TokenError::TokenExpired)` - Signature valid but past expiry
    pub fn verify(&self, token: &str) -> DomainResult<IssuedClaims> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies a token as if the current time were `now`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> DomainResult<IssuedClaims> {
        let claims = decode::<IssuedClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let error = classify_decode_error(e.kind());
                tracing::debug!(reason = error.kind(), "Token verification failed");
                DomainError::Token(error)
            })?;

        if claims.is_expired_at(now) {
            tracing::debug!(
                reason = TokenError::TokenExpired.kind(),
                "Token verification failed"
            );
            return Err(DomainError::Token(TokenError::TokenExpired));
        }

        Ok(claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("default_validity", &self.default_validity)
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

/// Maps a `jsonwebtoken` failure onto the token error taxonomy
///
/// A header naming another algorithm is reported as a signature failure:
/// the signature cannot have been produced with our key and algorithm.
fn classify_decode_error(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::InvalidSignature,
        ErrorKind::ExpiredSignature => TokenError::TokenExpired,
        _ => TokenError::MalformedToken,
    }
}
