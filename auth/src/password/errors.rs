use thiserror::Error;

/// Error type for password hashing and verification.
///
/// Messages never include the plaintext.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),

    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),
}
