//! Sector (hospital department) reference data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A hospital sector (ward, laboratory, administration, ...).
///
/// Sectors are reference data: never deleted, only deactivated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Sector {
    /// Unique sector identifier.
    pub id: Uuid,
    /// Unique sector name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Whether the sector is active.
    pub active: bool,
    /// When the sector was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSector {
    /// Sector name (unique).
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}
