//! Application state shared across all handlers.

use std::sync::Arc;

use medistaff_core::config::AppConfig;
use medistaff_database::DatabasePool;
use medistaff_service::account::AccountService;
use medistaff_service::directory::{EmployeeService, PositionService, SectorService};
use medistaff_service::offboarding::OffboardingService;
use medistaff_service::reservation::ReservationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration.
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool wrapper.
    pub db: DatabasePool,

    // ── Services ─────────────────────────────────────────────
    /// Console login service.
    pub account_service: Arc<AccountService>,
    /// Employee directory service.
    pub employee_service: Arc<EmployeeService>,
    /// Position reference-data service.
    pub position_service: Arc<PositionService>,
    /// Sector reference-data service.
    pub sector_service: Arc<SectorService>,
    /// Equipment reservation engine.
    pub reservation_service: Arc<ReservationService>,
    /// Offboarding service.
    pub offboarding_service: Arc<OffboardingService>,
}
