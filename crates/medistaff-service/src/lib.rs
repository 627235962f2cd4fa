//! # medistaff-service
//!
//! Business logic for MediStaff. Services orchestrate repositories inside
//! database transactions and enqueue notification jobs after commit.
//!
//! - [`directory`]: employee, position, and sector CRUD.
//! - [`account`]: console login with Argon2id verification.
//! - [`reservation`]: the equipment reservation engine.
//! - [`offboarding`]: employee exits and their reservation cascade.

pub mod account;
pub mod directory;
pub mod offboarding;
pub mod reservation;

mod tx;
