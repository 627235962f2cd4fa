//! Sector reference-data handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use medistaff_entity::sector::{CreateSector, Sector};

use crate::dto::request::{CreateSectorRequest, absent_fields, ensure_present};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /sectores
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Sector>>>, ApiError> {
    let sectors = state.sector_service.list_active().await?;
    Ok(Json(ApiResponse::ok(sectors)))
}

/// POST /sectores
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateSectorRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Sector>>), ApiError> {
    ensure_present(absent_fields(&[(
        "name",
        req.name.as_deref().is_some_and(|s| !s.trim().is_empty()),
    )]))?;

    let sector = state
        .sector_service
        .create(CreateSector {
            name: req.name.unwrap_or_default(),
            description: req.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(sector))))
}
