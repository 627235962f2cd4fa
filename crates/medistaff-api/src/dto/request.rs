//! Request DTOs.
//!
//! Required fields are modeled as `Option` so that missing ones are
//! reported together in a single validation error instead of a generic
//! deserialization failure.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use medistaff_core::error::AppError;

/// Login payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account username.
    pub username: String,
    /// Plaintext password, verified against the stored hash.
    pub password: String,
}

/// Employee registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployeeRequest {
    /// National identity document number.
    pub dni: Option<String>,
    /// Payroll file number.
    pub payroll_number: Option<String>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Assigned position.
    pub position_id: Option<Uuid>,
    /// Assigned sector.
    pub sector_id: Option<Uuid>,
    /// Date of hire.
    pub hire_date: Option<NaiveDate>,
}

/// Position creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePositionRequest {
    /// Position name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Base salary.
    pub base_salary: Option<i64>,
    /// Owning sector.
    pub sector_id: Option<Uuid>,
}

/// Sector creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSectorRequest {
    /// Sector name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
}

/// Reservation creation payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    /// Asset to reserve.
    pub equipment_id: Option<Uuid>,
    /// Borrowing employee.
    pub employee_id: Option<Uuid>,
    /// Who is booking it.
    pub requested_by: Option<Uuid>,
    /// First reserved day (inclusive).
    pub start_date: Option<NaiveDate>,
    /// Last reserved day (inclusive).
    pub end_date: Option<NaiveDate>,
    /// Informational pickup time.
    pub start_time: Option<NaiveTime>,
    /// Informational return time.
    pub end_time: Option<NaiveTime>,
    /// Why the equipment is needed.
    pub purpose: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
}

/// Reservation status transition payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionReservationRequest {
    /// Target status, as a lowercase string.
    pub status: String,
    /// Who is making the change.
    pub actor_id: Option<Uuid>,
    /// Why the change is being made; recorded in the audit history when
    /// present.
    pub reason: Option<String>,
}

/// Reservation cancellation payload (carried in the DELETE body).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CancelReservationRequest {
    /// Why the reservation is being cancelled.
    pub reason: Option<String>,
    /// Who is cancelling it.
    pub actor_id: Option<Uuid>,
}

/// Offboarding payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessOffboardingRequest {
    /// The employee to offboard.
    pub employee_id: Option<Uuid>,
    /// Effective exit date; defaults to today.
    pub exit_date: Option<NaiveDate>,
    /// Exit type, as a lowercase string.
    pub exit_type: Option<String>,
    /// Free-text reason.
    pub reason: Option<String>,
    /// Optional notes.
    pub notes: Option<String>,
    /// Who is processing the exit.
    pub processed_by: Option<Uuid>,
}

/// Reject with a validation error naming every missing required field.
pub(crate) fn ensure_present(missing: Vec<&'static str>) -> Result<(), AppError> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Collect the names whose values are absent.
pub(crate) fn absent_fields(fields: &[(&'static str, bool)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields() {
        let missing = absent_fields(&[
            ("employee_id", true),
            ("exit_type", false),
            ("reason", false),
        ]);
        assert_eq!(missing, vec!["exit_type", "reason"]);
    }

    #[test]
    fn test_ensure_present_message() {
        let err = ensure_present(vec!["employee_id", "reason"]).unwrap_err();
        assert_eq!(err.message, "Missing required fields: employee_id, reason");
    }

    #[test]
    fn test_ensure_present_ok_when_empty() {
        assert!(ensure_present(Vec::new()).is_ok());
    }
}
