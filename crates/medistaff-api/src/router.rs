//! Route definitions for the MediStaff HTTP API.
//!
//! Route paths are the wire contract the staff-management console consumes
//! and keep the legacy Spanish names. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::http::HeaderValue;
use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state);

    Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(employee_routes())
        .merge(position_routes())
        .merge(sector_routes())
        .merge(reservation_routes())
        .merge(offboarding_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Console login.
fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(handlers::auth::login))
}

/// Employee directory endpoints.
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/empleados", get(handlers::employee::list))
        .route("/empleados", post(handlers::employee::create))
        .route("/empleados/activos", get(handlers::employee::list_active))
}

/// Position reference-data endpoints.
fn position_routes() -> Router<AppState> {
    Router::new()
        .route("/puestos", get(handlers::position::list))
        .route("/puestos", post(handlers::position::create))
}

/// Sector reference-data endpoints.
fn sector_routes() -> Router<AppState> {
    Router::new()
        .route("/sectores", get(handlers::sector::list))
        .route("/sectores", post(handlers::sector::create))
}

/// Equipment reservation endpoints.
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/reservas", get(handlers::reservation::list))
        .route("/reservas", post(handlers::reservation::create))
        .route(
            "/reservas/fecha/{date}",
            get(handlers::reservation::list_for_date),
        )
        .route("/reservas/equipos", get(handlers::reservation::inventory))
        .route(
            "/reservas/equipos/disponibles/{date}",
            get(handlers::reservation::available_on),
        )
        .route(
            "/reservas/empleados",
            get(handlers::reservation::active_employees),
        )
        .route(
            "/reservas/estadisticas",
            get(handlers::reservation::stats),
        )
        .route(
            "/reservas/{id}/estado",
            put(handlers::reservation::transition),
        )
        .route("/reservas/{id}", delete(handlers::reservation::cancel))
}

/// Offboarding endpoints.
fn offboarding_routes() -> Router<AppState> {
    Router::new()
        .route("/bajas", get(handlers::offboarding::list))
        .route("/bajas", post(handlers::offboarding::process))
        .route(
            "/bajas/empleados-activos",
            get(handlers::offboarding::active_employees),
        )
        .route(
            "/bajas/estadisticas",
            get(handlers::offboarding::statistics),
        )
        .route(
            "/bajas/{id}/reenviar-email",
            post(handlers::offboarding::resend_email),
        )
}

/// Build the CORS layer from configuration.
///
/// `["*"]` allows any origin (development); anything else is parsed as an
/// explicit origin list.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors.allowed_origins;

    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(parsed))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
