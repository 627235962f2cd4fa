//! Position reference-data handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use medistaff_entity::position::{CreatePosition, Position, PositionDetail};

use crate::dto::request::{CreatePositionRequest, absent_fields, ensure_present};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /puestos
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PositionDetail>>>, ApiError> {
    let positions = state.position_service.list_active().await?;
    Ok(Json(ApiResponse::ok(positions)))
}

/// POST /puestos
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePositionRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Position>>), ApiError> {
    ensure_present(absent_fields(&[(
        "name",
        req.name.as_deref().is_some_and(|s| !s.trim().is_empty()),
    )]))?;

    let position = state
        .position_service
        .create(CreatePosition {
            name: req.name.unwrap_or_default(),
            description: req.description,
            base_salary: req.base_salary,
            sector_id: req.sector_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(position))))
}
