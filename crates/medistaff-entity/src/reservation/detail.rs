//! Reservation rows joined with employee and equipment information.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::equipment::EquipmentKind;

use super::status::ReservationStatus;

/// A reservation joined with borrower and asset detail, as consumed by the
/// reservation dashboard and the calendar day view.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReservationDetail {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// First reserved day (inclusive).
    pub start_date: NaiveDate,
    /// Last reserved day (inclusive).
    pub end_date: NaiveDate,
    /// Informational pickup time.
    pub start_time: Option<NaiveTime>,
    /// Informational return time.
    pub end_time: Option<NaiveTime>,
    /// Why the equipment is needed.
    pub purpose: String,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Current lifecycle status.
    pub status: ReservationStatus,
    /// When the equipment was handed out.
    pub delivered_at: Option<DateTime<Utc>>,
    /// When the equipment came back.
    pub returned_at: Option<DateTime<Utc>>,
    /// Borrower rating of the loan, if given.
    pub rating: Option<i16>,
    /// Final free-text feedback.
    pub final_comments: Option<String>,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// Borrower first name.
    pub employee_first_name: String,
    /// Borrower last name.
    pub employee_last_name: String,
    /// Borrower payroll number.
    pub payroll_number: String,
    /// Asset inventory code.
    pub asset_code: String,
    /// Asset display name.
    pub equipment_name: String,
    /// Asset brand.
    pub brand: Option<String>,
    /// Asset model.
    pub model: Option<String>,
    /// Asset kind.
    pub kind: EquipmentKind,
}
