//! Offboarding record model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::exit_type::ExitType;
use super::status::OffboardingStatus;

/// The record of one employee exit.
///
/// Exactly one record is created per active→inactive transition. Re-hiring
/// and a later re-offboarding create a new row rather than mutating this
/// one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OffboardingRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The employee who left.
    pub employee_id: Uuid,
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
    /// Who processed the exit.
    pub processed_by: Option<Uuid>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to process an offboarding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOffboarding {
    /// The employee to offboard.
    pub employee_id: Uuid,
    /// Effective exit date; defaults to today when omitted.
    pub exit_date: Option<NaiveDate>,
    /// Why the employee is leaving.
    pub exit_type: ExitType,
    /// Free-text reason (required, non-empty).
    pub reason: String,
    /// Optional notes.
    pub notes: Option<String>,
    /// Who is processing the exit.
    pub processed_by: Option<Uuid>,
}
