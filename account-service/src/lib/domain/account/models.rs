use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

/// Registered account.
///
/// Created on registration and never modified afterwards. `username` is the
/// unique identity key; `password_hash` is a PHC string, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// New account with a fresh identifier, stamped with the current time.
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: AccountId::new(),
            username,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Account unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Generate a new random account ID (UUID v4).
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identity attached to a request that passed the gate.
///
/// Inserted into request extensions by the authentication middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}
