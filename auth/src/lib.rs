//! Authentication primitives
//!
//! Provides the building blocks the account service composes:
//! - Credential syntax validation
//! - Password hashing (Argon2id)
//! - Bearer token issuance, validation and header extraction (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Credential Validation
//! ```
//! use auth::{validate, CredentialError, Credentials};
//!
//! assert!(validate(&Credentials::new("alice", "password123")).is_ok());
//! assert_eq!(
//!     validate(&Credentials::new("al ice", "password123")),
//!     Err(CredentialError::WhitespaceInUsername)
//! );
//! ```
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("password123").unwrap();
//! assert!(hasher.verify("password123", &hash).unwrap());
//! ```
//!
//! ## Tokens
//! ```
//! use auth::{extract_bearer_token, JwtHandler};
//! use chrono::Duration;
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//! let token = handler.issue("alice").unwrap();
//! let header = format!("Bearer {}", token);
//! let claims = handler.parse(extract_bearer_token(&header).unwrap()).unwrap();
//! assert_eq!(claims.username, "alice");
//! ```

pub mod authenticator;
pub mod credentials;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use credentials::validate;
pub use credentials::CredentialError;
pub use credentials::Credentials;
pub use jwt::extract_bearer_token;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
