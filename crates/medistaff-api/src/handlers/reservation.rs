//! Equipment reservation handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::NaiveDate;
use uuid::Uuid;

use medistaff_database::repositories::reservation::ReservationStats;
use medistaff_entity::employee::EmployeeSummary;
use medistaff_entity::equipment::EquipmentAsset;
use medistaff_entity::reservation::{
    NewReservation, Reservation, ReservationDetail, ReservationStatus,
};

use crate::dto::request::{
    CancelReservationRequest, CreateReservationRequest, TransitionReservationRequest,
    absent_fields, ensure_present,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /reservas
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ReservationDetail>>>, ApiError> {
    let reservations = state.reservation_service.list().await?;
    Ok(Json(ApiResponse::ok(reservations)))
}

/// GET /reservas/fecha/{date}
pub async fn list_for_date(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<ApiResponse<Vec<ReservationDetail>>>, ApiError> {
    let reservations = state.reservation_service.list_for_date(date).await?;
    Ok(Json(ApiResponse::ok(reservations)))
}

/// GET /reservas/equipos
pub async fn inventory(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EquipmentAsset>>>, ApiError> {
    let assets = state.reservation_service.inventory().await?;
    Ok(Json(ApiResponse::ok(assets)))
}

/// GET /reservas/equipos/disponibles/{date}
pub async fn available_on(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<Json<ApiResponse<Vec<EquipmentAsset>>>, ApiError> {
    let assets = state.reservation_service.available_on(date).await?;
    Ok(Json(ApiResponse::ok(assets)))
}

/// GET /reservas/empleados
pub async fn active_employees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EmployeeSummary>>>, ApiError> {
    let employees = state.employee_service.list_active().await?;
    Ok(Json(ApiResponse::ok(employees)))
}

/// GET /reservas/estadisticas
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReservationStats>>, ApiError> {
    let stats = state.reservation_service.stats().await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// POST /reservas
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Reservation>>), ApiError> {
    ensure_present(absent_fields(&[
        ("equipment_id", req.equipment_id.is_some()),
        ("employee_id", req.employee_id.is_some()),
        ("requested_by", req.requested_by.is_some()),
        ("start_date", req.start_date.is_some()),
        ("end_date", req.end_date.is_some()),
        (
            "purpose",
            req.purpose.as_deref().is_some_and(|s| !s.trim().is_empty()),
        ),
    ]))?;

    let reservation = state
        .reservation_service
        .create(NewReservation {
            equipment_id: req.equipment_id.unwrap_or_default(),
            employee_id: req.employee_id.unwrap_or_default(),
            requested_by: req.requested_by.unwrap_or_default(),
            start_date: req.start_date.unwrap_or_default(),
            end_date: req.end_date.unwrap_or_default(),
            start_time: req.start_time,
            end_time: req.end_time,
            purpose: req.purpose.unwrap_or_default(),
            notes: req.notes,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(reservation))))
}

/// PUT /reservas/{id}/estado
pub async fn transition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TransitionReservationRequest>,
) -> Result<Json<ApiResponse<Reservation>>, ApiError> {
    let target: ReservationStatus = req.status.parse().map_err(ApiError::from)?;

    let reservation = state
        .reservation_service
        .transition(id, target, req.actor_id, req.reason)
        .await?;

    Ok(Json(ApiResponse::ok(reservation)))
}

/// DELETE /reservas/{id}
///
/// The body carries the cancellation reason; `{}` cancels without one.
pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CancelReservationRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .reservation_service
        .cancel(id, req.reason, req.actor_id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Reservation cancelled".to_string(),
    })))
}
