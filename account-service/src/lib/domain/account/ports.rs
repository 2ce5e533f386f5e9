use async_trait::async_trait;
use auth::Credentials;

use crate::account::errors::AccountStoreError;
use crate::account::errors::AuthError;
use crate::account::models::Account;
use crate::account::models::Identity;

/// Port for the authentication gateway.
#[async_trait]
pub trait AuthGatewayPort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `credentials` - Raw username and password
    ///
    /// # Returns
    /// Created account
    ///
    /// # Errors
    /// * `InvalidCredentials` - A validation rule failed
    /// * `UsernameTaken` - Username is already registered
    /// * `Store` - Account store failed
    /// * `Internal` - Password hashing failed
    async fn register(&self, credentials: Credentials) -> Result<Account, AuthError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// Unknown usernames and wrong passwords are reported identically.
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `InvalidAuthentication` - Unknown user or wrong password
    /// * `Store` - Account store failed
    /// * `Internal` - Token signing failed
    async fn sign_in(&self, credentials: Credentials) -> Result<String, AuthError>;

    /// Decide whether a request may proceed.
    ///
    /// # Arguments
    /// * `authorization` - Raw `Authorization` header value, if present
    ///
    /// # Returns
    /// Identity of the token holder
    ///
    /// # Errors
    /// * `MalformedHeader` - Header absent or not `Bearer <token>`
    /// * `Token` - Signature, expiry or structure check failed
    /// * `UnregisteredUser` - Token names an account that no longer exists
    /// * `Store` - Account store failed
    async fn gate(&self, authorization: Option<&str>) -> Result<Identity, AuthError>;
}

/// Account store operations consumed by the gateway.
///
/// Implementations make no atomicity promise across calls; `insert` reports a
/// unique-key violation as `Duplicate`.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Check whether an account with this username exists.
    ///
    /// # Errors
    /// * `Unavailable` - Store operation failed
    async fn exists(&self, username: &str) -> Result<bool, AccountStoreError>;

    /// Retrieve the account with this username.
    ///
    /// # Errors
    /// * `NotFound` - No such account
    /// * `Unavailable` - Store operation failed
    async fn find_by_username(&self, username: &str) -> Result<Account, AccountStoreError>;

    /// Persist a new account.
    ///
    /// # Returns
    /// The stored account
    ///
    /// # Errors
    /// * `Duplicate` - Username already stored
    /// * `Unavailable` - Store operation failed
    async fn insert(&self, account: Account) -> Result<Account, AccountStoreError>;
}
