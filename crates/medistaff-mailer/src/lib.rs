//! # medistaff-mailer
//!
//! The notification gateway: SMTP delivery of offboarding notices and
//! pending-equipment reminders to a fixed, configured set of recipients
//! (systems and HR inboxes).
//!
//! Delivery is best-effort. Callers on the fire-and-forget path log the
//! returned report; the synchronous resend path surfaces it to the caller.

pub mod gateway;
pub mod templates;

pub use gateway::{DeliveryReport, Mailer};
