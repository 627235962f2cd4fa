//! Small helpers for service-level transactions.

use sqlx::{PgPool, Postgres, Transaction};

use medistaff_core::error::{AppError, ErrorKind};
use medistaff_core::result::AppResult;

/// Begin a transaction on the pool.
pub(crate) async fn begin(pool: &PgPool) -> AppResult<Transaction<'static, Postgres>> {
    pool.begin().await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
    })
}

/// Commit a transaction.
pub(crate) async fn commit(tx: Transaction<'static, Postgres>) -> AppResult<()> {
    tx.commit().await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
    })
}
