use auth::CredentialError;
use auth::JwtError;
use thiserror::Error;

/// Errors reported by an account store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountStoreError {
    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Username already exists: {0}")]
    Duplicate(String),

    #[error("{0}")]
    Unavailable(String),
}

/// Top-level error for register, sign-in and gate operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    // Client input
    #[error("{0}")]
    InvalidCredentials(#[from] CredentialError),

    #[error("{0}")]
    MalformedHeader(String),

    // Authentication failures
    #[error("Invalid username or password")]
    InvalidAuthentication,

    #[error("{0}")]
    Token(JwtError),

    #[error("User is not registered: {0}")]
    UnregisteredUser(String),

    // Conflicts
    #[error("username is already taken")]
    UsernameTaken(String),

    // Infrastructure errors
    #[error("failed to query account store: {0}")]
    Store(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<AccountStoreError> for AuthError {
    fn from(err: AccountStoreError) -> Self {
        match err {
            AccountStoreError::Duplicate(username) => AuthError::UsernameTaken(username),
            AccountStoreError::NotFound(msg) | AccountStoreError::Unavailable(msg) => {
                AuthError::Store(msg)
            }
        }
    }
}
