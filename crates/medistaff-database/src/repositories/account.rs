//! Login account repository implementation.

use sqlx::PgPool;

use medistaff_core::result::AppResult;
use medistaff_entity::account::Account;

use super::{db_err, map_db_err};

/// Repository for console login accounts.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Failed to fetch account", e))
    }

    /// Count registered accounts.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_err("Failed to count accounts", e))
    }

    /// Create an account with a pre-hashed password.
    pub async fn create(&self, username: &str, password_hash: &str) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (username, password_hash) VALUES ($1, $2) RETURNING *",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_err(
                "Failed to create account",
                "An account with that username already exists",
                e,
            )
        })
    }
}
