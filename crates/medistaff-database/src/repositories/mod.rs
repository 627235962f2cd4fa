//! Repository implementations, one per aggregate.

pub mod account;
pub mod employee;
pub mod equipment;
pub mod offboarding;
pub mod position;
pub mod reservation;
pub mod sector;

use medistaff_core::error::{AppError, ErrorKind};

/// Map a sqlx error into an [`AppError`].
///
/// Unique-constraint violations become user-facing conflict errors with the
/// supplied message; everything else is a database error carrying the
/// context string.
pub(crate) fn map_db_err(context: &str, conflict_message: &str, e: sqlx::Error) -> AppError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return AppError::conflict(conflict_message);
        }
    }
    AppError::with_source(ErrorKind::Database, context, e)
}

/// Map a sqlx error that cannot be a unique violation.
pub(crate) fn db_err(context: &str, e: sqlx::Error) -> AppError {
    AppError::with_source(ErrorKind::Database, context, e)
}
