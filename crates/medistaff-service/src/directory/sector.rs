//! Sector reference-data operations.

use std::sync::Arc;

use tracing::info;

use medistaff_core::error::AppError;
use medistaff_core::result::AppResult;
use medistaff_database::repositories::sector::SectorRepository;
use medistaff_entity::sector::{CreateSector, Sector};

/// Handles sector listings and creation.
#[derive(Debug, Clone)]
pub struct SectorService {
    /// Sector repository.
    sectors: Arc<SectorRepository>,
}

impl SectorService {
    /// Create a new sector service.
    pub fn new(sectors: Arc<SectorRepository>) -> Self {
        Self { sectors }
    }

    /// List active sectors.
    pub async fn list_active(&self) -> AppResult<Vec<Sector>> {
        self.sectors.list_active().await
    }

    /// Create a new sector. The name is required and unique.
    pub async fn create(&self, data: CreateSector) -> AppResult<Sector> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Sector name is required"));
        }

        let sector = self.sectors.create(&data).await?;
        info!(sector_id = %sector.id, name = %sector.name, "Sector created");
        Ok(sector)
    }
}
