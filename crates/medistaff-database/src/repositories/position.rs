//! Position repository implementation.

use sqlx::PgPool;

use medistaff_core::result::AppResult;
use medistaff_entity::position::{CreatePosition, Position, PositionDetail};

use super::{db_err, map_db_err};

/// Repository for position reference data.
#[derive(Debug, Clone)]
pub struct PositionRepository {
    pool: PgPool,
}

impl PositionRepository {
    /// Create a new position repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active positions with their sector names.
    pub async fn list_active(&self) -> AppResult<Vec<PositionDetail>> {
        sqlx::query_as::<_, PositionDetail>(
            "SELECT p.id, p.name, p.description, p.sector_id, p.active, \
                    s.name AS sector_name \
             FROM positions p \
             LEFT JOIN sectors s ON p.sector_id = s.id \
             WHERE p.active = TRUE \
             ORDER BY p.name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list positions", e))
    }

    /// Create a new position.
    pub async fn create(&self, data: &CreatePosition) -> AppResult<Position> {
        sqlx::query_as::<_, Position>(
            "INSERT INTO positions (name, description, base_salary, sector_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.base_salary)
        .bind(data.sector_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_err(
                "Failed to create position",
                "A position with that name already exists",
                e,
            )
        })
    }
}
