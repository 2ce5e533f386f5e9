use std::fmt;

use secrecy::ExposeSecret;
use secrecy::SecretString;

use super::errors::CredentialError;

/// Minimum number of characters (Unicode scalar values) in a password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Raw username/password pair as submitted by a client.
///
/// Never persisted. The password lives in a `SecretString`, so it is zeroized
/// on drop and redacted from debug output.
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    /// Wrap raw input without any normalization.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Plaintext password, for hashing or verification only.
    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Check the syntactic rules for a username/password pair.
///
/// Rules are checked in order and the first failure wins:
/// 1. username is non-empty
/// 2. username has no whitespace
/// 3. password has at least [`MIN_PASSWORD_LENGTH`] characters
/// 4. password has no whitespace
///
/// Inputs are used verbatim; nothing is trimmed or case-folded.
///
/// # Errors
/// The `CredentialError` variant matching the first violated rule.
pub fn validate(credentials: &Credentials) -> Result<(), CredentialError> {
    let username = credentials.username.as_str();
    let password = credentials.password();

    if username.is_empty() {
        return Err(CredentialError::EmptyUsername);
    }
    if username.chars().any(char::is_whitespace) {
        return Err(CredentialError::WhitespaceInUsername);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CredentialError::PasswordTooShort);
    }
    if password.chars().any(char::is_whitespace) {
        return Err(CredentialError::WhitespaceInPassword);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        let credentials = Credentials::new("alice", "password123");
        assert_eq!(validate(&credentials), Ok(()));
    }

    #[test]
    fn test_empty_username() {
        let credentials = Credentials::new("", "password123");
        assert_eq!(validate(&credentials), Err(CredentialError::EmptyUsername));
    }

    #[test]
    fn test_whitespace_in_username() {
        for username in ["al ice", "alice\t", "\nalice", "a\u{00a0}b"] {
            let credentials = Credentials::new(username, "password123");
            assert_eq!(
                validate(&credentials),
                Err(CredentialError::WhitespaceInUsername),
                "username {:?}",
                username
            );
        }
    }

    #[test]
    fn test_password_too_short() {
        let credentials = Credentials::new("bob", "short");
        assert_eq!(validate(&credentials), Err(CredentialError::PasswordTooShort));

        // Exactly at the minimum is accepted
        let credentials = Credentials::new("bob", "12345678");
        assert_eq!(validate(&credentials), Ok(()));
    }

    #[test]
    fn test_password_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        let credentials = Credentials::new("bob", "ééééééé");
        assert_eq!(validate(&credentials), Err(CredentialError::PasswordTooShort));
    }

    #[test]
    fn test_whitespace_in_password() {
        let credentials = Credentials::new("bob", "pass word123");
        assert_eq!(
            validate(&credentials),
            Err(CredentialError::WhitespaceInPassword)
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        // Both the username and the password are invalid
        let credentials = Credentials::new("al ice", "short");
        assert_eq!(
            validate(&credentials),
            Err(CredentialError::WhitespaceInUsername)
        );

        let credentials = Credentials::new("", "pass word");
        assert_eq!(validate(&credentials), Err(CredentialError::EmptyUsername));

        // Short password with whitespace reports the length rule first
        let credentials = Credentials::new("bob", "a b");
        assert_eq!(validate(&credentials), Err(CredentialError::PasswordTooShort));
    }

    #[test]
    fn test_no_normalization() {
        // Surrounding whitespace is not trimmed away
        let credentials = Credentials::new(" alice", "password123");
        assert_eq!(
            validate(&credentials),
            Err(CredentialError::WhitespaceInUsername)
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("alice", "password123");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("password123"));
    }
}
