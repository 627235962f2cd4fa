//! # medistaff-api
//!
//! HTTP API layer for MediStaff built on Axum.
//!
//! Provides the REST endpoints consumed by the staff-management console,
//! DTOs, and the error mapping from [`medistaff_core::AppError`] to the
//! `{error, details?}` JSON bodies and status codes the console expects.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
