//! HTTP request handlers, one module per route group.

pub mod auth;
pub mod employee;
pub mod health;
pub mod offboarding;
pub mod position;
pub mod reservation;
pub mod sector;
