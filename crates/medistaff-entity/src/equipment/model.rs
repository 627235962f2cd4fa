//! Equipment asset model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::EquipmentKind;
use super::status::EquipmentStatus;

/// A loanable piece of equipment tracked by the reservation engine.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EquipmentAsset {
    /// Unique asset identifier.
    pub id: Uuid,
    /// Inventory code (unique, e.g. "NB-001").
    pub asset_code: String,
    /// Asset display name.
    pub name: String,
    /// Equipment kind.
    pub kind: EquipmentKind,
    /// Manufacturer brand.
    pub brand: Option<String>,
    /// Model designation.
    pub model: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Current status, derived from the active reservation if any.
    pub status: EquipmentStatus,
    /// Where the asset currently sits.
    pub current_location: Option<String>,
    /// Whether the asset is part of the loan pool.
    pub active: bool,
    /// When the asset was registered.
    pub created_at: DateTime<Utc>,
}

/// The short asset identification carried in reminder notifications.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EquipmentSummary {
    /// Unique asset identifier.
    pub id: Uuid,
    /// Inventory code.
    pub asset_code: String,
    /// Asset display name.
    pub name: String,
    /// Manufacturer brand.
    pub brand: Option<String>,
}
