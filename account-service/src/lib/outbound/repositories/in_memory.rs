use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::errors::AccountStoreError;
use crate::domain::account::models::Account;
use crate::domain::account::ports::AccountRepository;

/// Process-local account store keyed by username.
///
/// Used for development runs (`store.backend = "memory"`) and tests. Contents
/// are lost when the process exits.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delete an account, returning it if it was present.
    pub async fn remove(&self, username: &str) -> Option<Account> {
        self.accounts.write().await.remove(username)
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn exists(&self, username: &str) -> Result<bool, AccountStoreError> {
        Ok(self.accounts.read().await.contains_key(username))
    }

    async fn find_by_username(&self, username: &str) -> Result<Account, AccountStoreError> {
        self.accounts
            .read()
            .await
            .get(username)
            .cloned()
            .ok_or_else(|| AccountStoreError::NotFound(username.to_string()))
    }

    async fn insert(&self, account: Account) -> Result<Account, AccountStoreError> {
        match self.accounts.write().await.entry(account.username.clone()) {
            Entry::Occupied(_) => Err(AccountStoreError::Duplicate(account.username)),
            Entry::Vacant(slot) => Ok(slot.insert(account).clone()),
        }
    }
}
