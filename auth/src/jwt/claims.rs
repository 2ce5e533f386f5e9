use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Token payload identifying an account.
///
/// `username` is the identity key. `exp` and `iat` are Unix timestamps in
/// seconds, encoded under their RFC 7519 names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub username: String,

    /// Expiration time
    pub exp: i64,

    /// Issued at
    pub iat: i64,
}

impl Claims {
    /// Claims for `username`, issued at `now` and valid for `lifetime`.
    ///
    /// # Errors
    /// * `EncodingFailed` - `now + lifetime` is outside the representable range
    pub fn new(
        username: impl Into<String>,
        now: DateTime<Utc>,
        lifetime: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = now.checked_add_signed(lifetime).ok_or_else(|| {
            JwtError::EncodingFailed("token expiry is out of range".to_string())
        })?;

        Ok(Self {
            username: username.into(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        })
    }

    /// Claims for `username` issued right now.
    pub fn for_user(username: impl Into<String>, lifetime: Duration) -> Result<Self, JwtError> {
        Self::new(username, Utc::now(), lifetime)
    }
}
