//! Append-only reservation audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::ReservationStatus;

/// One status change of a reservation.
///
/// The history table is the authoritative record of why a reservation
/// changed; the free-text notes on the reservation itself stay user-owned.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReservationHistoryEntry {
    /// Unique entry identifier.
    pub id: Uuid,
    /// The reservation that changed.
    pub reservation_id: Uuid,
    /// Status before the change, if the reservation existed before.
    pub previous_status: Option<ReservationStatus>,
    /// Status after the change.
    pub new_status: ReservationStatus,
    /// Who made the change.
    pub changed_by: Option<Uuid>,
    /// Why the change was made.
    pub change_reason: Option<String>,
    /// When the change happened.
    pub changed_at: DateTime<Utc>,
}
