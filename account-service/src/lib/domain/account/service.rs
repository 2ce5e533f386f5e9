use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use auth::Credentials;

use crate::account::errors::AccountStoreError;
use crate::account::errors::AuthError;
use crate::account::models::Account;
use crate::account::models::Identity;
use crate::account::ports::AccountRepository;
use crate::account::ports::AuthGatewayPort;

/// Authentication gateway over an account store.
///
/// Each operation is a short pipeline that stops at the first failure. The
/// service holds no mutable state of its own.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account store implementation
    /// * `authenticator` - Password hasher and token handler
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<AR> AuthGatewayPort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<Account, AuthError> {
        auth::validate(&credentials)?;

        // Existence check and insert are not atomic; a concurrent duplicate
        // surfaces from `insert` and maps to UsernameTaken as well.
        if self.repository.exists(&credentials.username).await.map_err(|e| {
            tracing::error!(error = %e, "Account existence check failed");
            AuthError::from(e)
        })? {
            return Err(AuthError::UsernameTaken(credentials.username));
        }

        let password_hash = self
            .authenticator
            .hash_password(credentials.password())
            .map_err(|e| {
                tracing::error!(error = %e, "Password hashing failed");
                AuthError::Internal(e.to_string())
            })?;

        let Credentials { username, .. } = credentials;

        let account = self
            .repository
            .insert(Account::new(username, password_hash))
            .await
            .map_err(|e| {
                if !matches!(e, AccountStoreError::Duplicate(_)) {
                    tracing::error!(error = %e, "Account insert failed");
                }
                AuthError::from(e)
            })?;

        tracing::info!(
            account_id = %account.id,
            username = %account.username,
            "Account registered"
        );

        Ok(account)
    }

    async fn sign_in(&self, credentials: Credentials) -> Result<String, AuthError> {
        let account = self
            .repository
            .find_by_username(&credentials.username)
            .await
            .map_err(|e| {
                if !matches!(e, AccountStoreError::NotFound(_)) {
                    tracing::error!(error = %e, "Account lookup failed during sign-in");
                }
                AuthError::InvalidAuthentication
            })?;

        let result = self
            .authenticator
            .authenticate(
                credentials.password(),
                &account.password_hash,
                &account.username,
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AuthError::InvalidAuthentication,
                AuthenticationError::PasswordError(err) => {
                    tracing::warn!(
                        account_id = %account.id,
                        error = %err,
                        "Stored password hash could not be verified"
                    );
                    AuthError::InvalidAuthentication
                }
                AuthenticationError::JwtError(err) => {
                    tracing::error!(error = %err, "Token generation failed");
                    AuthError::Internal(err.to_string())
                }
            })?;

        tracing::info!(username = %account.username, "Token issued");

        Ok(result.access_token)
    }

    async fn gate(&self, authorization: Option<&str>) -> Result<Identity, AuthError> {
        let header = authorization.ok_or_else(|| {
            AuthError::MalformedHeader("Authorization header is missing".to_string())
        })?;

        let token = auth::extract_bearer_token(header)
            .map_err(|e| AuthError::MalformedHeader(e.to_string()))?;

        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(AuthError::Token)?;

        // Tokens outlive account deletion, so the store is consulted every time.
        let registered = self.repository.exists(&claims.username).await.map_err(|e| {
            tracing::error!(error = %e, "Account existence check failed during gate");
            AuthError::from(e)
        })?;

        if !registered {
            return Err(AuthError::UnregisteredUser(claims.username));
        }

        Ok(Identity {
            username: claims.username,
        })
    }
}
