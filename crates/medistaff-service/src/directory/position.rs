//! Position reference-data operations.

use std::sync::Arc;

use tracing::info;

use medistaff_core::error::AppError;
use medistaff_core::result::AppResult;
use medistaff_database::repositories::position::PositionRepository;
use medistaff_entity::position::{CreatePosition, Position, PositionDetail};

/// Handles position listings and creation.
#[derive(Debug, Clone)]
pub struct PositionService {
    /// Position repository.
    positions: Arc<PositionRepository>,
}

impl PositionService {
    /// Create a new position service.
    pub fn new(positions: Arc<PositionRepository>) -> Self {
        Self { positions }
    }

    /// List active positions with sector names.
    pub async fn list_active(&self) -> AppResult<Vec<PositionDetail>> {
        self.positions.list_active().await
    }

    /// Create a new position. The name is required and unique.
    pub async fn create(&self, data: CreatePosition) -> AppResult<Position> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Position name is required"));
        }

        let position = self.positions.create(&data).await?;
        info!(position_id = %position.id, name = %position.name, "Position created");
        Ok(position)
    }
}
