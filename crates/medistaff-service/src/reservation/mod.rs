//! The equipment reservation engine.

pub mod service;

pub use service::ReservationService;
