//! # medistaff-entity
//!
//! Domain models for MediStaff: the staff directory (employees, positions,
//! sectors), login accounts, loanable equipment, reservations with their
//! status state machine and audit history, and offboarding records.
//!
//! Every model derives `sqlx::FromRow` for direct hydration from Postgres,
//! and every status field is a closed `sqlx::Type` enumeration.

pub mod account;
pub mod employee;
pub mod equipment;
pub mod offboarding;
pub mod position;
pub mod reservation;
pub mod sector;
