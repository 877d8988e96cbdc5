//! Credential Storage
//! Mission: Keep registered usernames and bcrypt hashes for the process lifetime

use crate::auth::models::Credential;
use anyhow::{Context, Result};
use bcrypt::{hash, verify};
use parking_lot::RwLock;
use tracing::info;

/// Work factor used for interactive logins
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Bounds accepted by bcrypt
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// In-memory credential list. Usernames are not required to be unique;
/// lookups return the first match.
pub struct UserStore {
    credentials: RwLock<Vec<Credential>>,
    cost: u32,
}

impl UserStore {
    pub fn new() -> Self {
        Self::with_cost(DEFAULT_BCRYPT_COST)
    }

    pub fn with_cost(cost: u32) -> Self {
        Self {
            credentials: RwLock::new(Vec::new()),
            cost,
        }
    }

    /// Hash `password` and append a credential. Blocks on bcrypt; callers
    /// on the async runtime should go through `spawn_blocking`.
    pub fn create_user(&self, username: &str, password: &str) -> Result<()> {
        let password_hash = hash(password, self.cost).context("Failed to hash password")?;

        let mut credentials = self.credentials.write();
        credentials.push(Credential {
            username: username.to_string(),
            password_hash,
        });

        info!("✅ Registered user: {} ({} total)", username, credentials.len());
        Ok(())
    }

    /// First credential registered under `username`
    pub fn get_user_by_username(&self, username: &str) -> Option<Credential> {
        self.credentials
            .read()
            .iter()
            .find(|c| c.username == username)
            .cloned()
    }

    /// Verify username and password. Unknown users and wrong passwords both
    /// yield `Ok(false)`.
    pub fn verify_password(&self, username: &str, password: &str) -> Result<bool> {
        match self.get_user_by_username(username) {
            Some(credential) => {
                verify(password, &credential.password_hash).context("Failed to verify password")
            }
            None => Ok(false),
        }
    }

    pub fn len(&self) -> usize {
        self.credentials.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.read().is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
