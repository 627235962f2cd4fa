//! Employee directory handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use medistaff_entity::employee::{CreateEmployee, Employee, EmployeeDetail, EmployeeSummary};

use crate::dto::request::{CreateEmployeeRequest, absent_fields, ensure_present};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /empleados
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EmployeeDetail>>>, ApiError> {
    let employees = state.employee_service.list().await?;
    Ok(Json(ApiResponse::ok(employees)))
}

/// GET /empleados/activos
pub async fn list_active(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EmployeeSummary>>>, ApiError> {
    let employees = state.employee_service.list_active().await?;
    Ok(Json(ApiResponse::ok(employees)))
}

/// POST /empleados
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), ApiError> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

    ensure_present(absent_fields(&[
        ("dni", present(&req.dni)),
        ("payroll_number", present(&req.payroll_number)),
        ("first_name", present(&req.first_name)),
        ("last_name", present(&req.last_name)),
        ("email", present(&req.email)),
        ("phone", present(&req.phone)),
        ("hire_date", req.hire_date.is_some()),
    ]))?;

    let employee = state
        .employee_service
        .create(CreateEmployee {
            dni: req.dni.unwrap_or_default(),
            payroll_number: req.payroll_number.unwrap_or_default(),
            first_name: req.first_name.unwrap_or_default(),
            last_name: req.last_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
            position_id: req.position_id,
            sector_id: req.sector_id,
            hire_date: req.hire_date.unwrap_or_default(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(employee))))
}
