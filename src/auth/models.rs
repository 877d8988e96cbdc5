//! Authentication Models
//! Mission: Define credential, token and login data structures

use serde::{Deserialize, Serialize};

/// Registered credential
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password_hash: String, // bcrypt hash - never serialize
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    pub iat: i64, // issued at (unix seconds)
    pub exp: i64, // expiration (unix seconds)
}

/// Username of the token holder, attached to responses of gated routes so
/// outer layers can attribute the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser(pub String);

/// Register/login request body.
///
/// Both fields are optional at the serde level so that absent, null and
/// empty values all reach the presence check instead of a body rejection.
#[derive(Debug, Default, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl CredentialsRequest {
    /// Returns both fields when they are present and non-empty.
    pub fn present(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|u| !u.is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.is_empty())?;
        Some((username, password))
    }
}

/// Login response
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub jwt: String,
}
