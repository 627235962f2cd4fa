//! Reservation repository implementation.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use medistaff_core::result::AppResult;
use medistaff_entity::equipment::EquipmentSummary;
use medistaff_entity::reservation::{
    NewReservation, Reservation, ReservationDetail, ReservationPeriod, ReservationStatus,
};

use super::db_err;

/// Aggregate reservation counters for the dashboard.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct ReservationStats {
    /// All reservations ever created.
    pub total: i64,
    /// Currently pending.
    pub pending: i64,
    /// Currently confirmed.
    pub confirmed: i64,
    /// Currently in progress.
    pub in_progress: i64,
    /// Completed.
    pub completed: i64,
    /// Cancelled.
    pub cancelled: i64,
    /// Non-cancelled reservations whose date range covers today.
    pub today: i64,
    /// Non-cancelled reservations starting in the current calendar month.
    pub this_month: i64,
}

/// Repository for equipment reservations and their audit history.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

const DETAIL_COLUMNS: &str =
    "r.id, r.start_date, r.end_date, r.start_time, r.end_time, r.purpose, \
     r.notes, r.status, r.delivered_at, r.returned_at, r.rating, \
     r.final_comments, r.created_at, \
     e.first_name AS employee_first_name, e.last_name AS employee_last_name, \
     e.payroll_number, \
     q.asset_code, q.name AS equipment_name, q.brand, q.model, q.kind";

const DETAIL_JOINS: &str =
    "FROM reservations r \
     JOIN employees e ON r.employee_id = e.id \
     JOIN equipment_assets q ON r.equipment_id = q.id";

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all reservations with borrower and asset detail, newest first.
    pub async fn list_detailed(&self) -> AppResult<Vec<ReservationDetail>> {
        sqlx::query_as::<_, ReservationDetail>(&format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
             ORDER BY r.start_date DESC, r.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list reservations", e))
    }

    /// List reservations whose date range covers `date`, for the calendar
    /// day view.
    pub async fn list_for_date(&self, date: NaiveDate) -> AppResult<Vec<ReservationDetail>> {
        sqlx::query_as::<_, ReservationDetail>(&format!(
            "SELECT {DETAIL_COLUMNS} {DETAIL_JOINS} \
             WHERE r.start_date <= $1 AND r.end_date >= $1 \
             ORDER BY r.start_time"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list reservations for date", e))
    }

    /// Find a reservation by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Failed to fetch reservation", e))
    }

    /// Fetch a reservation and lock its row. Transaction-scoped.
    pub async fn find_for_update(
        conn: &mut PgConnection,
        id: Uuid,
    ) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| db_err("Failed to lock reservation", e))
    }

    /// Count blocking reservations on an asset whose inclusive date range
    /// overlaps `period`. Transaction-scoped: runs under the caller's asset
    /// row lock.
    ///
    /// Overlap uses the three-clause inclusive test: either endpoint of the
    /// requested range falls inside an existing range, or the requested
    /// range fully contains one.
    pub async fn count_conflicts(
        conn: &mut PgConnection,
        equipment_id: Uuid,
        period: ReservationPeriod,
    ) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM reservations \
             WHERE equipment_id = $1 \
             AND status IN ('pending', 'confirmed', 'in_progress') \
             AND ( \
                 (start_date <= $2 AND end_date >= $2) OR \
                 (start_date <= $3 AND end_date >= $3) OR \
                 (start_date >= $2 AND end_date <= $3) \
             )",
        )
        .bind(equipment_id)
        .bind(period.start_date)
        .bind(period.end_date)
        .fetch_one(conn)
        .await
        .map_err(|e| db_err("Failed to check reservation conflicts", e))
    }

    /// Insert a new reservation in the initial `pending` status.
    /// Transaction-scoped.
    pub async fn insert(
        conn: &mut PgConnection,
        data: &NewReservation,
    ) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations \
                 (equipment_id, employee_id, requested_by, start_date, end_date, \
                  start_time, end_time, purpose, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(data.equipment_id)
        .bind(data.employee_id)
        .bind(data.requested_by)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(&data.purpose)
        .bind(&data.notes)
        .fetch_one(conn)
        .await
        .map_err(|e| db_err("Failed to create reservation", e))
    }

    /// Move a reservation to `status`, stamping the delivery timestamp on
    /// entering in-progress and the return timestamp on entering completed.
    /// Transaction-scoped.
    pub async fn update_status(
        conn: &mut PgConnection,
        id: Uuid,
        status: ReservationStatus,
    ) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET \
                 status = $2, \
                 delivered_at = CASE WHEN $2 = 'in_progress'::reservation_status \
                                     THEN NOW() ELSE delivered_at END, \
                 returned_at = CASE WHEN $2 = 'completed'::reservation_status \
                                    THEN NOW() ELSE returned_at END, \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_one(conn)
        .await
        .map_err(|e| db_err("Failed to update reservation status", e))
    }

    /// Append a marker to the reservation's notes, joined to any existing
    /// text rather than replacing it. Transaction-scoped.
    pub async fn append_note(conn: &mut PgConnection, id: Uuid, marker: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE reservations SET \
                 notes = CASE WHEN notes IS NULL OR notes = '' THEN $2 \
                              ELSE notes || ' | ' || $2 END, \
                 updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(marker)
        .execute(conn)
        .await
        .map_err(|e| db_err("Failed to append reservation note", e))?;
        Ok(())
    }

    /// Record one status change in the append-only history table.
    /// Transaction-scoped.
    pub async fn insert_history(
        conn: &mut PgConnection,
        reservation_id: Uuid,
        previous_status: Option<ReservationStatus>,
        new_status: ReservationStatus,
        changed_by: Option<Uuid>,
        change_reason: Option<&str>,
    ) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO reservation_history \
                 (reservation_id, previous_status, new_status, changed_by, change_reason) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(reservation_id)
        .bind(previous_status)
        .bind(new_status)
        .bind(changed_by)
        .bind(change_reason)
        .execute(conn)
        .await
        .map_err(|e| db_err("Failed to record reservation history", e))?;
        Ok(())
    }

    /// Assets an employee has not yet returned: distinct equipment on
    /// confirmed or in-progress reservations ending today or later.
    pub async fn pending_equipment_for(
        &self,
        employee_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<Vec<EquipmentSummary>> {
        sqlx::query_as::<_, EquipmentSummary>(
            "SELECT DISTINCT q.id, q.asset_code, q.name, q.brand \
             FROM reservations r \
             JOIN equipment_assets q ON r.equipment_id = q.id \
             WHERE r.employee_id = $1 \
             AND r.status IN ('confirmed', 'in_progress') \
             AND r.end_date >= $2",
        )
        .bind(employee_id)
        .bind(today)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list pending equipment", e))
    }

    /// Lock and return an employee's cancellable future reservations:
    /// pending or confirmed, starting strictly after `today`.
    /// Transaction-scoped.
    pub async fn future_cancellable_for(
        conn: &mut PgConnection,
        employee_id: Uuid,
        today: NaiveDate,
    ) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations \
             WHERE employee_id = $1 \
             AND status IN ('pending', 'confirmed') \
             AND start_date > $2 \
             FOR UPDATE",
        )
        .bind(employee_id)
        .bind(today)
        .fetch_all(conn)
        .await
        .map_err(|e| db_err("Failed to list cancellable reservations", e))
    }

    /// Statuses of every blocking reservation on an asset.
    /// Transaction-scoped.
    ///
    /// Used to re-derive the asset's status after a cascade cancellation:
    /// an ongoing loan by someone else must keep the asset in use.
    pub async fn blocking_statuses(
        conn: &mut PgConnection,
        equipment_id: Uuid,
    ) -> AppResult<Vec<ReservationStatus>> {
        sqlx::query_scalar::<_, ReservationStatus>(
            "SELECT status FROM reservations \
             WHERE equipment_id = $1 \
             AND status IN ('pending', 'confirmed', 'in_progress')",
        )
        .bind(equipment_id)
        .fetch_all(conn)
        .await
        .map_err(|e| db_err("Failed to read blocking reservation statuses", e))
    }

    /// Aggregate counters for the reservation dashboard.
    pub async fn stats(&self) -> AppResult<ReservationStats> {
        sqlx::query_as::<_, ReservationStats>(
            "SELECT COUNT(*) AS total, \
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending, \
                    COUNT(*) FILTER (WHERE status = 'confirmed') AS confirmed, \
                    COUNT(*) FILTER (WHERE status = 'in_progress') AS in_progress, \
                    COUNT(*) FILTER (WHERE status = 'completed') AS completed, \
                    COUNT(*) FILTER (WHERE status = 'cancelled') AS cancelled, \
                    COUNT(*) FILTER (WHERE status <> 'cancelled' \
                                     AND start_date <= CURRENT_DATE \
                                     AND end_date >= CURRENT_DATE) AS today, \
                    COUNT(*) FILTER (WHERE status <> 'cancelled' \
                                     AND DATE_TRUNC('month', start_date) = \
                                         DATE_TRUNC('month', CURRENT_DATE)) AS this_month \
             FROM reservations",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_err("Failed to compute reservation statistics", e))
    }
}
