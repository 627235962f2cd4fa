//! Equipment status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a loanable asset.
///
/// Kept consistent with the status of the asset's current non-terminal
/// reservation; `Available` when none exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "equipment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    /// Free to reserve.
    Available,
    /// Claimed by a pending or confirmed reservation.
    Reserved,
    /// Handed out under an in-progress reservation.
    InUse,
    /// Pulled from circulation for maintenance.
    UnderMaintenance,
}

impl EquipmentStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::InUse => "in_use",
            Self::UnderMaintenance => "under_maintenance",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = medistaff_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "in_use" => Ok(Self::InUse),
            "under_maintenance" => Ok(Self::UnderMaintenance),
            _ => Err(medistaff_core::AppError::validation(format!(
                "Invalid equipment status: '{s}'. Expected one of: available, reserved, in_use, under_maintenance"
            ))),
        }
    }
}
