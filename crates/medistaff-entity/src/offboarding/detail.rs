//! Offboarding rows joined with employee information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::exit_type::ExitType;
use super::status::OffboardingStatus;

/// An offboarding record joined with the employee's identification, as
/// consumed by the offboarding dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OffboardingDetail {
    /// Unique record identifier.
    pub id: Uuid,
    /// Effective exit date.
    pub exit_date: NaiveDate,
    /// Why the employee left.
    pub exit_type: ExitType,
    /// Free-text reason.
    pub reason: String,
    /// Optional notes.
    pub notes: Option<String>,
    /// Record status.
    pub status: OffboardingStatus,
    /// Employee first name.
    pub first_name: String,
    /// Employee last name.
    pub last_name: String,
    /// Employee national identity number.
    pub dni: String,
    /// Employee payroll number.
    pub payroll_number: String,
    /// Position name, if assigned.
    pub position_name: Option<String>,
    /// Sector name, if assigned.
    pub sector_name: Option<String>,
}
