//! JWT Token Handler
//! Mission: Issue and verify short-lived HS256 bearer tokens

use crate::auth::models::Claims;
use anyhow::{Context, Result};
use chrono::Utc;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use tracing::debug;

/// Default token lifetime: one hour
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Why a token failed verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Invalid,
}

/// JWT Handler for token operations
pub struct JwtHandler {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl JwtHandler {
    /// Create a new JWT handler with secret key and the default lifetime
    pub fn new(secret: &str) -> Self {
        Self::with_ttl(secret, DEFAULT_TTL_SECS)
    }

    pub fn with_ttl(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Issue a token for `username` using the wall clock
    pub fn generate_token(&self, username: &str) -> Result<String> {
        self.generate_token_at(username, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (unix seconds)
    pub fn generate_token_at(&self, username: &str, now: i64) -> Result<String> {
        let exp = now
            .checked_add(self.ttl_secs)
            .context("Invalid expiration timestamp")?;

        let claims = Claims {
            username: username.to_string(),
            iat: now,
            exp,
        };

        debug!("Generating JWT for {}, expires at {}", username, exp);

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("Failed to generate JWT")
    }

    /// Verify a token against the wall clock
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_token_at(token, Utc::now().timestamp())
    }

    /// Verify signature and payload, then check expiry against `now`.
    ///
    /// Expiry is checked here rather than by `jsonwebtoken` so the clock can
    /// be injected; a token is expired once `now >= exp`.
    pub fn validate_token_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let decoded = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            debug!("JWT rejected: {:?}", e.kind());
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        if now >= decoded.claims.exp {
            return Err(TokenError::Expired);
        }

        debug!("Validated JWT for {}", decoded.claims.username);
        Ok(decoded.claims)
    }
}
