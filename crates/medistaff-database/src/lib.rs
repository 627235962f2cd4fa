//! # medistaff-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for MediStaff.
//!
//! Repositories expose pool-scoped methods for plain reads and
//! connection-scoped associated functions (taking `&mut PgConnection`) for
//! the steps that services compose inside a single transaction.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
