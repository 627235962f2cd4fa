//! Offboarding record repository implementation.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use medistaff_core::result::AppResult;
use medistaff_entity::offboarding::{
    ExitType, OffboardingDetail, OffboardingRecord, OffboardingStatus,
};

use super::db_err;

/// Offboarding count for one exit type.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct ExitTypeCount {
    /// The exit type.
    pub exit_type: ExitType,
    /// Number of records.
    pub count: i64,
}

/// Offboarding count for one calendar month.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct MonthlyCount {
    /// Month in `YYYY-MM` form.
    pub month: String,
    /// Number of records.
    pub count: i64,
}

/// Repository for offboarding records.
#[derive(Debug, Clone)]
pub struct OffboardingRepository {
    pool: PgPool,
}

impl OffboardingRepository {
    /// Create a new offboarding repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all offboarding records with employee detail, newest first.
    pub async fn list_detailed(&self) -> AppResult<Vec<OffboardingDetail>> {
        sqlx::query_as::<_, OffboardingDetail>(
            "SELECT b.id, b.exit_date, b.exit_type, b.reason, b.notes, b.status, \
                    e.first_name, e.last_name, e.dni, e.payroll_number, \
                    p.name AS position_name, s.name AS sector_name \
             FROM offboarding_records b \
             JOIN employees e ON b.employee_id = e.id \
             LEFT JOIN positions p ON e.position_id = p.id \
             LEFT JOIN sectors s ON e.sector_id = s.id \
             ORDER BY b.exit_date DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list offboarding records", e))
    }

    /// Find an offboarding record by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<OffboardingRecord>> {
        sqlx::query_as::<_, OffboardingRecord>("SELECT * FROM offboarding_records WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Failed to fetch offboarding record", e))
    }

    /// Insert the record of one employee exit. Transaction-scoped.
    pub async fn insert(
        conn: &mut PgConnection,
        employee_id: Uuid,
        exit_date: NaiveDate,
        exit_type: ExitType,
        reason: &str,
        notes: Option<&str>,
        processed_by: Option<Uuid>,
    ) -> AppResult<OffboardingRecord> {
        sqlx::query_as::<_, OffboardingRecord>(
            "INSERT INTO offboarding_records \
                 (employee_id, exit_date, exit_type, reason, notes, processed_by) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(employee_id)
        .bind(exit_date)
        .bind(exit_type)
        .bind(reason)
        .bind(notes)
        .bind(processed_by)
        .fetch_one(conn)
        .await
        .map_err(|e| db_err("Failed to create offboarding record", e))
    }

    /// Mark a record as notified after a confirmed email delivery.
    pub async fn set_status(&self, id: Uuid, status: OffboardingStatus) -> AppResult<()> {
        sqlx::query("UPDATE offboarding_records SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| db_err("Failed to update offboarding status", e))?;
        Ok(())
    }

    /// Offboarding counts grouped by exit type, most frequent first.
    pub async fn counts_by_type(&self) -> AppResult<Vec<ExitTypeCount>> {
        sqlx::query_as::<_, ExitTypeCount>(
            "SELECT exit_type, COUNT(*) AS count \
             FROM offboarding_records \
             GROUP BY exit_type \
             ORDER BY count DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to compute offboarding type counts", e))
    }

    /// Offboarding counts per month over the trailing six months.
    pub async fn counts_by_month(&self) -> AppResult<Vec<MonthlyCount>> {
        sqlx::query_as::<_, MonthlyCount>(
            "SELECT TO_CHAR(exit_date, 'YYYY-MM') AS month, COUNT(*) AS count \
             FROM offboarding_records \
             WHERE exit_date >= CURRENT_DATE - INTERVAL '6 months' \
             GROUP BY TO_CHAR(exit_date, 'YYYY-MM') \
             ORDER BY month DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to compute monthly offboarding counts", e))
    }
}
