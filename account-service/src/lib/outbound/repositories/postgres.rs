use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::errors::AccountStoreError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::ports::AccountRepository;

/// PostgreSQL implementation of AccountRepository.
///
/// Backed by the `accounts` table; the `accounts_username_key` unique
/// constraint is the backstop for concurrent registrations.
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Create a new PostgreSQL account repository.
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool (migrations already applied)
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: AccountId(row.id),
            username: row.username,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

fn unavailable(e: sqlx::Error) -> AccountStoreError {
    AccountStoreError::Unavailable(e.to_string())
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn exists(&self, username: &str) -> Result<bool, AccountStoreError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM accounts WHERE username = $1)
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(unavailable)
    }

    async fn find_by_username(&self, username: &str) -> Result<Account, AccountStoreError> {
        sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(unavailable)?
        .map(Account::from)
        .ok_or_else(|| AccountStoreError::NotFound(username.to_string()))
    }

    async fn insert(&self, account: Account) -> Result<Account, AccountStoreError> {
        sqlx::query(
            r#"
            INSERT INTO accounts (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.id.0)
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountStoreError::Duplicate(account.username.clone());
                }
            }
            unavailable(e)
        })?;

        tracing::debug!(account_id = %account.id, "Account row inserted");
        Ok(account)
    }
}
