//! Offboarding: validate the exit, record it, deactivate the employee,
//! cancel future reservations, and notify systems/HR after commit.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use medistaff_core::error::AppError;
use medistaff_core::result::AppResult;
use medistaff_database::repositories::employee::{EmployeeRepository, StaffTotals};
use medistaff_database::repositories::equipment::EquipmentRepository;
use medistaff_database::repositories::offboarding::{
    ExitTypeCount, MonthlyCount, OffboardingRepository,
};
use medistaff_database::repositories::reservation::ReservationRepository;
use medistaff_entity::employee::EmployeeSummary;
use medistaff_entity::equipment::EquipmentSummary;
use medistaff_entity::offboarding::{
    NewOffboarding, OffboardingDetail, OffboardingRecord, OffboardingStatus,
};
use medistaff_entity::reservation::ReservationStatus;
use medistaff_mailer::{DeliveryReport, Mailer};
use medistaff_worker::{NotificationJob, NotificationQueue};

use crate::reservation::service::derive_equipment_status;
use crate::tx;

/// Result of processing one employee exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffboardingOutcome {
    /// The committed offboarding record.
    pub record: OffboardingRecord,
    /// Equipment the employee has not yet returned. Informational; does not
    /// block the exit.
    pub pending_equipment: Vec<EquipmentSummary>,
    /// How many future reservations were cancelled by the cascade.
    pub cancelled_reservations: usize,
    /// Whether a notification was enqueued for background delivery.
    pub notification_queued: bool,
}

/// Offboarding dashboard statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffboardingStatistics {
    /// Counts grouped by exit type.
    pub by_type: Vec<ExitTypeCount>,
    /// Counts per month over the trailing six months.
    pub by_month: Vec<MonthlyCount>,
    /// Active/inactive/total staff tallies.
    pub totals: StaffTotals,
}

/// Handles employee exits.
#[derive(Debug, Clone)]
pub struct OffboardingService {
    /// Connection pool for transactions.
    pool: PgPool,
    /// Employee repository.
    employees: Arc<EmployeeRepository>,
    /// Reservation repository.
    reservations: Arc<ReservationRepository>,
    /// Offboarding repository.
    offboardings: Arc<OffboardingRepository>,
    /// SMTP gateway, for the synchronous resend path.
    mailer: Arc<Mailer>,
    /// Notification queue, for the fire-and-forget path.
    queue: NotificationQueue,
}

impl OffboardingService {
    /// Create a new offboarding service.
    pub fn new(
        pool: PgPool,
        employees: Arc<EmployeeRepository>,
        reservations: Arc<ReservationRepository>,
        offboardings: Arc<OffboardingRepository>,
        mailer: Arc<Mailer>,
        queue: NotificationQueue,
    ) -> Self {
        Self {
            pool,
            employees,
            reservations,
            offboardings,
            mailer,
            queue,
        }
    }

    /// List all offboarding records with employee detail.
    pub async fn list(&self) -> AppResult<Vec<OffboardingDetail>> {
        self.offboardings.list_detailed().await
    }

    /// List active employees, the source for the offboarding form.
    pub async fn active_employees(&self) -> AppResult<Vec<EmployeeSummary>> {
        self.employees.list_active_summaries().await
    }

    /// Offboarding dashboard statistics.
    pub async fn statistics(&self) -> AppResult<OffboardingStatistics> {
        Ok(OffboardingStatistics {
            by_type: self.offboardings.counts_by_type().await?,
            by_month: self.offboardings.counts_by_month().await?,
            totals: self.employees.staff_totals().await?,
        })
    }

    /// Process one employee exit.
    ///
    /// Inside a single transaction: insert the offboarding record, flip the
    /// employee inactive, and cancel every pending/confirmed reservation of
    /// theirs starting after today. Equipment not yet returned is collected
    /// first and reported back without blocking the exit. Notifications are
    /// enqueued only after the transaction commits; their delivery outcome
    /// never affects the response.
    pub async fn process(&self, data: NewOffboarding) -> AppResult<OffboardingOutcome> {
        if data.reason.trim().is_empty() {
            return Err(AppError::validation("Missing required fields: reason"));
        }

        let employee = self
            .employees
            .find_by_id(data.employee_id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        if !employee.active {
            return Err(AppError::conflict("Employee is already offboarded"));
        }

        let today = Utc::now().date_naive();
        let exit_date = data.exit_date.unwrap_or(today);

        // Equipment still out with the employee. Informational only.
        let pending_equipment = self
            .reservations
            .pending_equipment_for(employee.id, today)
            .await?;

        let mut db = tx::begin(&self.pool).await?;

        let record = OffboardingRepository::insert(
            &mut db,
            employee.id,
            exit_date,
            data.exit_type,
            data.reason.trim(),
            data.notes.as_deref(),
            data.processed_by,
        )
        .await?;

        EmployeeRepository::deactivate(&mut db, employee.id).await?;

        let future =
            ReservationRepository::future_cancellable_for(&mut db, employee.id, today).await?;
        let cancelled_reservations = future.len();
        let mut touched_assets = BTreeSet::new();

        for reservation in &future {
            ReservationRepository::append_note(
                &mut db,
                reservation.id,
                "CANCELLED: employee offboarded",
            )
            .await?;
            ReservationRepository::update_status(
                &mut db,
                reservation.id,
                ReservationStatus::Cancelled,
            )
            .await?;
            ReservationRepository::insert_history(
                &mut db,
                reservation.id,
                Some(reservation.status),
                ReservationStatus::Cancelled,
                data.processed_by,
                Some("Cancelled due to employee offboarding"),
            )
            .await?;
            touched_assets.insert(reservation.equipment_id);
        }

        // Re-derive each touched asset's status: an ongoing loan by someone
        // else must keep the asset in use.
        for equipment_id in touched_assets {
            let blocking =
                ReservationRepository::blocking_statuses(&mut db, equipment_id).await?;
            EquipmentRepository::set_status(
                &mut db,
                equipment_id,
                derive_equipment_status(&blocking),
            )
            .await?;
        }

        tx::commit(db).await?;

        info!(
            employee_id = %employee.id,
            record_id = %record.id,
            cancelled_reservations,
            pending_equipment = pending_equipment.len(),
            "Employee offboarded"
        );

        let summary = self
            .employees
            .find_summary(employee.id)
            .await?
            .unwrap_or(EmployeeSummary {
                id: employee.id,
                dni: employee.dni.clone(),
                payroll_number: employee.payroll_number.clone(),
                first_name: employee.first_name.clone(),
                last_name: employee.last_name.clone(),
                position_name: None,
                sector_name: None,
            });

        self.queue.enqueue(NotificationJob::OffboardingNotice {
            employee: summary.clone(),
            record: record.clone(),
        });
        if !pending_equipment.is_empty() {
            self.queue.enqueue(NotificationJob::EquipmentReminder {
                employee: summary,
                assets: pending_equipment.clone(),
            });
        }

        Ok(OffboardingOutcome {
            record,
            pending_equipment,
            cancelled_reservations,
            notification_queued: true,
        })
    }

    /// Re-send the notification for an existing offboarding record,
    /// synchronously, reporting the delivery outcome to the caller.
    pub async fn resend_notification(&self, record_id: Uuid) -> AppResult<DeliveryReport> {
        let record = self
            .offboardings
            .find_by_id(record_id)
            .await?
            .ok_or_else(|| AppError::not_found("Offboarding record not found"))?;

        let employee = self
            .employees
            .find_summary(record.employee_id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        let report = self.mailer.send_offboarding_notice(&employee, &record).await?;

        if report.delivered {
            self.offboardings
                .set_status(record.id, OffboardingStatus::Notified)
                .await?;
        }

        Ok(report)
    }
}
