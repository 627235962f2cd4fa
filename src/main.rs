//! MediStaff Server — Hospital Staff Management
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use medistaff_core::config::AppConfig;
use medistaff_core::error::AppError;

use medistaff_database::DatabasePool;
use medistaff_database::repositories::account::AccountRepository;
use medistaff_database::repositories::employee::EmployeeRepository;
use medistaff_database::repositories::equipment::EquipmentRepository;
use medistaff_database::repositories::offboarding::OffboardingRepository;
use medistaff_database::repositories::position::PositionRepository;
use medistaff_database::repositories::reservation::ReservationRepository;
use medistaff_database::repositories::sector::SectorRepository;

use medistaff_mailer::Mailer;
use medistaff_service::account::AccountService;
use medistaff_service::directory::{EmployeeService, PositionService, SectorService};
use medistaff_service::offboarding::OffboardingService;
use medistaff_service::reservation::ReservationService;
use medistaff_worker::NotificationRunner;

use medistaff_api::{AppState, build_router};

#[tokio::main]
async fn main() {
    let env = std::env::var("MEDISTAFF_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting MediStaff v{}", env!("CARGO_PKG_VERSION"));
    let config = Arc::new(config);

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    medistaff_database::migration::run_migrations(db.pool()).await?;

    // ── Step 2: Repositories ─────────────────────────────────────
    let pool = db.pool().clone();
    let account_repo = Arc::new(AccountRepository::new(pool.clone()));
    let employee_repo = Arc::new(EmployeeRepository::new(pool.clone()));
    let position_repo = Arc::new(PositionRepository::new(pool.clone()));
    let sector_repo = Arc::new(SectorRepository::new(pool.clone()));
    let equipment_repo = Arc::new(EquipmentRepository::new(pool.clone()));
    let reservation_repo = Arc::new(ReservationRepository::new(pool.clone()));
    let offboarding_repo = Arc::new(OffboardingRepository::new(pool.clone()));

    // ── Step 3: Notification gateway + worker queue ──────────────
    let mailer = Arc::new(Mailer::new(&config.mailer)?);
    let (queue, queue_rx) = medistaff_worker::queue::channel();

    // ── Step 4: Services ─────────────────────────────────────────
    let account_service = Arc::new(AccountService::new(Arc::clone(&account_repo)));
    let employee_service = Arc::new(EmployeeService::new(Arc::clone(&employee_repo)));
    let position_service = Arc::new(PositionService::new(Arc::clone(&position_repo)));
    let sector_service = Arc::new(SectorService::new(Arc::clone(&sector_repo)));
    let reservation_service = Arc::new(ReservationService::new(
        pool.clone(),
        Arc::clone(&reservation_repo),
        Arc::clone(&equipment_repo),
    ));
    let offboarding_service = Arc::new(OffboardingService::new(
        pool.clone(),
        Arc::clone(&employee_repo),
        Arc::clone(&reservation_repo),
        Arc::clone(&offboarding_repo),
        Arc::clone(&mailer),
        queue.clone(),
    ));

    account_service
        .ensure_bootstrap_account(&config.auth)
        .await?;

    // ── Step 5: Notification worker ──────────────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let runner = NotificationRunner::new(queue_rx, Arc::clone(&mailer), &config.worker);
    let worker_handle = tokio::spawn(runner.run(shutdown_rx));

    // ── Step 6: HTTP server ──────────────────────────────────────
    let state = AppState {
        config: Arc::clone(&config),
        db,
        account_service,
        employee_service,
        position_service,
        sector_service,
        reservation_service,
        offboarding_service,
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("MediStaff server listening on {addr}");

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 7: Wait for the notification worker ─────────────────
    tracing::info!("Waiting for background tasks to complete...");
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
    let _ = tokio::time::timeout(grace, worker_handle).await;

    tracing::info!("MediStaff server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
