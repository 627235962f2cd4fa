//! # medistaff-worker
//!
//! Background notification dispatch for MediStaff.
//!
//! Offboarding commits enqueue [`job::NotificationJob`]s on the
//! [`queue::NotificationQueue`]; the [`runner::NotificationRunner`] drains
//! the queue on its own task and hands each job to the mailer after a short
//! dispatch delay. Delivery failures are logged and never propagated back to
//! the request that triggered them.

pub mod job;
pub mod queue;
pub mod runner;

pub use job::NotificationJob;
pub use queue::NotificationQueue;
pub use runner::NotificationRunner;
