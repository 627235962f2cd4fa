//! Employee offboarding and its reservation cascade.

pub mod service;

pub use service::{OffboardingOutcome, OffboardingService, OffboardingStatistics};
