//! Position (job title) reference data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job position (nurse, radiologist, administrative clerk, ...).
///
/// Positions are reference data: never deleted, only deactivated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Position {
    /// Unique position identifier.
    pub id: Uuid,
    /// Unique position name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Base monthly salary, if tracked.
    pub base_salary: Option<i64>,
    /// Sector this position belongs to, if any.
    pub sector_id: Option<Uuid>,
    /// Whether the position is active.
    pub active: bool,
    /// When the position was created.
    pub created_at: DateTime<Utc>,
}

/// A position joined with its sector name, for listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PositionDetail {
    /// Unique position identifier.
    pub id: Uuid,
    /// Position name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Sector identifier, if assigned.
    pub sector_id: Option<Uuid>,
    /// Sector name, if assigned.
    pub sector_name: Option<String>,
    /// Whether the position is active.
    pub active: bool,
}

/// Data required to create a new position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePosition {
    /// Position name (unique).
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional base salary.
    pub base_salary: Option<i64>,
    /// Optional owning sector.
    pub sector_id: Option<Uuid>,
}
