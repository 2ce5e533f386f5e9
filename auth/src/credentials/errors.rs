use thiserror::Error;

/// Error type for credential syntax checks.
///
/// One variant per rule so callers can surface a specific message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("username must not be empty")]
    EmptyUsername,

    #[error("username must not contain whitespace")]
    WhitespaceInUsername,

    #[error("password must have at least 8 characters")]
    PasswordTooShort,

    #[error("password must not contain whitespace")]
    WhitespaceInPassword,
}
