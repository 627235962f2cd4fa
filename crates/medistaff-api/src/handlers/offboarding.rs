//! Offboarding handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use medistaff_entity::employee::EmployeeSummary;
use medistaff_entity::offboarding::{ExitType, NewOffboarding, OffboardingDetail};
use medistaff_mailer::DeliveryReport;
use medistaff_service::offboarding::{OffboardingOutcome, OffboardingStatistics};

use crate::dto::request::{ProcessOffboardingRequest, absent_fields, ensure_present};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /bajas
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<OffboardingDetail>>>, ApiError> {
    let records = state.offboarding_service.list().await?;
    Ok(Json(ApiResponse::ok(records)))
}

/// POST /bajas
pub async fn process(
    State(state): State<AppState>,
    Json(req): Json<ProcessOffboardingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<OffboardingOutcome>>), ApiError> {
    ensure_present(absent_fields(&[
        ("employee_id", req.employee_id.is_some()),
        (
            "exit_type",
            req.exit_type.as_deref().is_some_and(|s| !s.trim().is_empty()),
        ),
        (
            "reason",
            req.reason.as_deref().is_some_and(|s| !s.trim().is_empty()),
        ),
    ]))?;

    let exit_type: ExitType = req.exit_type.unwrap_or_default().parse().map_err(ApiError::from)?;

    let outcome = state
        .offboarding_service
        .process(NewOffboarding {
            employee_id: req.employee_id.unwrap_or_default(),
            exit_date: req.exit_date,
            exit_type,
            reason: req.reason.unwrap_or_default(),
            notes: req.notes,
            processed_by: req.processed_by,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(outcome))))
}

/// GET /bajas/empleados-activos
pub async fn active_employees(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EmployeeSummary>>>, ApiError> {
    let employees = state.offboarding_service.active_employees().await?;
    Ok(Json(ApiResponse::ok(employees)))
}

/// GET /bajas/estadisticas
pub async fn statistics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<OffboardingStatistics>>, ApiError> {
    let stats = state.offboarding_service.statistics().await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// POST /bajas/{id}/reenviar-email
///
/// Unlike the fire-and-forget path during creation, this re-sends the
/// notification synchronously and reports the delivery outcome directly.
pub async fn resend_email(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeliveryReport>>, ApiError> {
    let report = state.offboarding_service.resend_notification(id).await?;
    Ok(Json(ApiResponse::ok(report)))
}
