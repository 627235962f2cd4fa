//! Equipment asset repository implementation.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use medistaff_core::result::AppResult;
use medistaff_entity::equipment::{EquipmentAsset, EquipmentStatus};

use super::db_err;

/// Repository for loanable equipment assets.
#[derive(Debug, Clone)]
pub struct EquipmentRepository {
    pool: PgPool,
}

impl EquipmentRepository {
    /// Create a new equipment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the active loan pool, ordered by inventory code.
    pub async fn list_active(&self) -> AppResult<Vec<EquipmentAsset>> {
        sqlx::query_as::<_, EquipmentAsset>(
            "SELECT * FROM equipment_assets WHERE active = TRUE ORDER BY asset_code",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list equipment", e))
    }

    /// List active assets with no blocking reservation covering `date`.
    ///
    /// A reservation blocks its asset when its status is pending, confirmed,
    /// or in progress and its inclusive date range contains the day.
    pub async fn available_on(&self, date: NaiveDate) -> AppResult<Vec<EquipmentAsset>> {
        sqlx::query_as::<_, EquipmentAsset>(
            "SELECT * FROM equipment_assets e \
             WHERE e.active = TRUE \
             AND e.id NOT IN ( \
                 SELECT equipment_id FROM reservations \
                 WHERE start_date <= $1 AND end_date >= $1 \
                 AND status IN ('pending', 'confirmed', 'in_progress') \
             ) \
             ORDER BY e.asset_code",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list available equipment", e))
    }

    /// Fetch an asset and take a row-level lock on it for the duration of
    /// the surrounding transaction.
    ///
    /// Serializes concurrent conflict checks on the same asset so that two
    /// overlapping create requests cannot both pass the check before either
    /// commits.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> AppResult<Option<EquipmentAsset>> {
        sqlx::query_as::<_, EquipmentAsset>(
            "SELECT * FROM equipment_assets WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(conn)
        .await
        .map_err(|e| db_err("Failed to lock equipment asset", e))
    }

    /// Set an asset's status. Transaction-scoped.
    pub async fn set_status(
        conn: &mut PgConnection,
        id: Uuid,
        status: EquipmentStatus,
    ) -> AppResult<()> {
        sqlx::query("UPDATE equipment_assets SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(conn)
            .await
            .map_err(|e| db_err("Failed to update equipment status", e))?;
        Ok(())
    }
}
