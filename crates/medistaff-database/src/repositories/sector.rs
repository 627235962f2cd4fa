//! Sector repository implementation.

use sqlx::PgPool;

use medistaff_core::result::AppResult;
use medistaff_entity::sector::{CreateSector, Sector};

use super::{db_err, map_db_err};

/// Repository for sector reference data.
#[derive(Debug, Clone)]
pub struct SectorRepository {
    pool: PgPool,
}

impl SectorRepository {
    /// Create a new sector repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List active sectors.
    pub async fn list_active(&self) -> AppResult<Vec<Sector>> {
        sqlx::query_as::<_, Sector>(
            "SELECT * FROM sectors WHERE active = TRUE ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list sectors", e))
    }

    /// Create a new sector.
    pub async fn create(&self, data: &CreateSector) -> AppResult<Sector> {
        sqlx::query_as::<_, Sector>(
            "INSERT INTO sectors (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_err(
                "Failed to create sector",
                "A sector with that name already exists",
                e,
            )
        })
    }
}
