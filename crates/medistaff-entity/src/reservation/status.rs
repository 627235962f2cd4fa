//! Reservation status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::equipment::EquipmentStatus;

/// Status of an equipment reservation.
///
/// The lifecycle is a closed state machine:
///
/// ```text
/// pending      -> confirmed | cancelled
/// confirmed    -> in_progress | cancelled
/// in_progress  -> completed
/// ```
///
/// `Completed` and `Cancelled` are terminal. Any other transition is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Awaiting confirmation (initial state).
    Pending,
    /// Confirmed, equipment held for pickup.
    Confirmed,
    /// Equipment handed out.
    InProgress,
    /// Equipment returned.
    Completed,
    /// Cancelled before pickup.
    Cancelled,
}

impl ReservationStatus {
    /// Check if the reservation is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Check if the reservation occupies its asset's calendar.
    ///
    /// Blocking reservations participate in conflict detection and
    /// availability queries.
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed | Self::InProgress)
    }

    /// Check if the reservation may still be cancelled.
    ///
    /// Once equipment has been handed out the reservation must run to
    /// completion instead.
    pub fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    /// Check whether a transition to `target` is a legal edge of the state
    /// machine.
    pub fn can_transition_to(&self, target: ReservationStatus) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::InProgress)
                | (Self::Confirmed, Self::Cancelled)
                | (Self::InProgress, Self::Completed)
        )
    }

    /// The equipment status implied by this reservation status.
    pub fn equipment_status(&self) -> EquipmentStatus {
        match self {
            Self::Pending | Self::Confirmed => EquipmentStatus::Reserved,
            Self::InProgress => EquipmentStatus::InUse,
            Self::Completed | Self::Cancelled => EquipmentStatus::Available,
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = medistaff_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(medistaff_core::AppError::validation(format!(
                "Invalid reservation status: '{s}'. Expected one of: pending, confirmed, in_progress, completed, cancelled"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legal_edges() {
        use ReservationStatus::*;
        assert!(Pending.can_transition_to(Confirmed));
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(InProgress));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(InProgress.can_transition_to(Completed));
    }

    #[test]
    fn test_illegal_edges() {
        use ReservationStatus::*;
        assert!(!Pending.can_transition_to(InProgress));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!InProgress.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Cancelled.can_transition_to(Confirmed));
        for s in [Pending, Confirmed, InProgress, Completed, Cancelled] {
            assert!(!s.can_transition_to(s), "self-transition must be illegal");
        }
    }

    #[test]
    fn test_terminal_states_have_no_outgoing_edges() {
        use ReservationStatus::*;
        for terminal in [Completed, Cancelled] {
            for target in [Pending, Confirmed, InProgress, Completed, Cancelled] {
                assert!(!terminal.can_transition_to(target));
            }
        }
    }

    #[test]
    fn test_equipment_status_derivation() {
        use crate::equipment::EquipmentStatus as E;
        use ReservationStatus::*;
        assert_eq!(Pending.equipment_status(), E::Reserved);
        assert_eq!(Confirmed.equipment_status(), E::Reserved);
        assert_eq!(InProgress.equipment_status(), E::InUse);
        assert_eq!(Completed.equipment_status(), E::Available);
        assert_eq!(Cancelled.equipment_status(), E::Available);
    }

    #[test]
    fn test_cancellable_only_before_pickup() {
        use ReservationStatus::*;
        assert!(Pending.is_cancellable());
        assert!(Confirmed.is_cancellable());
        assert!(!InProgress.is_cancellable());
        assert!(!Completed.is_cancellable());
        assert!(!Cancelled.is_cancellable());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "in_progress".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::InProgress
        );
        assert_eq!(
            "CANCELLED".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Cancelled
        );
        assert!("delivered".parse::<ReservationStatus>().is_err());
    }
}
