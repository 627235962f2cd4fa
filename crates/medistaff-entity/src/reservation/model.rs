//! Reservation entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::period::ReservationPeriod;
use super::status::ReservationStatus;

/// A time-bounded claim on an equipment asset by an employee.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: Uuid,
    /// Reserved asset.
    pub equipment_id: Uuid,
    /// Borrowing employee.
    pub employee_id: Uuid,
    /// Who booked the reservation.
    pub requested_by: Uuid,
    /// First reserved day (inclusive).
    pub start_date: NaiveDate,
    /// Last reserved day (inclusive).
    pub end_date: NaiveDate,
    /// Informational pickup time. Not part of conflict detection.
    pub start_time: Option<NaiveTime>,
    /// Informational return time. Not part of conflict detection.
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
    /// Borrower rating of the loan (1-5), if given.
    pub rating: Option<i16>,
    /// Final free-text feedback.
    pub final_comments: Option<String>,
    /// When the reservation was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// The inclusive date range this reservation claims.
    pub fn period(&self) -> ReservationPeriod {
        ReservationPeriod::new(self.start_date, self.end_date)
    }
}

/// Data required to create a new reservation.
///
/// The status is not part of the payload: every reservation starts out
/// `pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    /// Asset to reserve.
    pub equipment_id: Uuid,
    /// Borrowing employee.
    pub employee_id: Uuid,
    /// Who is booking it.
    pub requested_by: Uuid,
    /// First reserved day (inclusive).
    pub start_date: NaiveDate,
    /// Last reserved day (inclusive).
    pub end_date: NaiveDate,
    /// Informational pickup time.
    pub start_time: Option<NaiveTime>,
    /// Informational return time.
    pub end_time: Option<NaiveTime>,
    /// Why the equipment is needed (required, non-empty).
    pub purpose: String,
    /// Free-text notes.
    pub notes: Option<String>,
}

impl NewReservation {
    /// The inclusive date range being requested.
    pub fn period(&self) -> ReservationPeriod {
        ReservationPeriod::new(self.start_date, self.end_date)
    }
}
