//! Employee entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hospital employee.
///
/// Employees are never hard-deleted. The `active` flag flips to `false`
/// exactly once per offboarding; re-hiring flips it back and a later
/// offboarding creates a new record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: Uuid,
    /// National identity document number (unique).
    pub dni: String,
    /// Payroll file number (unique).
    pub payroll_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Whether the employee is currently on staff.
    pub active: bool,
    /// Assigned position, if any.
    pub position_id: Option<Uuid>,
    /// Assigned sector, if any.
    pub sector_id: Option<Uuid>,
    /// Date of hire.
    pub hire_date: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Full display name, last name first.
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// An employee joined with position and sector names, for listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeDetail {
    /// Unique employee identifier.
    pub id: Uuid,
    /// National identity document number.
    pub dni: String,
    /// Payroll file number.
    pub payroll_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Whether the employee is currently on staff.
    pub active: bool,
    /// Position name, if assigned.
    pub position_name: Option<String>,
    /// Sector name, if assigned.
    pub sector_name: Option<String>,
    /// Date of hire.
    pub hire_date: NaiveDate,
}

/// The short employee identification carried in notifications and form
/// listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeSummary {
    /// Unique employee identifier.
    pub id: Uuid,
    /// National identity document number.
    pub dni: String,
    /// Payroll file number.
    pub payroll_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Position name, if assigned.
    pub position_name: Option<String>,
    /// Sector name, if assigned.
    pub sector_name: Option<String>,
}

impl EmployeeSummary {
    /// Full display name, last name first.
    pub fn full_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// Data required to register a new employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    /// National identity document number (unique).
    pub dni: String,
    /// Payroll file number (unique).
    pub payroll_number: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Assigned position, if any.
    pub position_id: Option<Uuid>,
    /// Assigned sector, if any.
    pub sector_id: Option<Uuid>,
    /// Date of hire.
    pub hire_date: NaiveDate,
}
