//! Employee repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use medistaff_core::result::AppResult;
use medistaff_entity::employee::{CreateEmployee, Employee, EmployeeDetail, EmployeeSummary};

use super::{db_err, map_db_err};

/// Active/inactive/total staff tallies.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
pub struct StaffTotals {
    /// Employees currently on staff.
    pub active_employees: i64,
    /// Offboarded employees.
    pub inactive_employees: i64,
    /// All employees ever registered.
    pub total_employees: i64,
}

/// Repository for employee records.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all employees with position and sector names.
    pub async fn list_detailed(&self) -> AppResult<Vec<EmployeeDetail>> {
        sqlx::query_as::<_, EmployeeDetail>(
            "SELECT e.id, e.dni, e.payroll_number, e.first_name, e.last_name, \
                    e.email, e.phone, e.active, e.hire_date, \
                    p.name AS position_name, s.name AS sector_name \
             FROM employees e \
             LEFT JOIN positions p ON e.position_id = p.id \
             LEFT JOIN sectors s ON e.sector_id = s.id \
             ORDER BY e.last_name, e.first_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list employees", e))
    }

    /// List active employees in short form, for form dropdowns and
    /// notifications.
    pub async fn list_active_summaries(&self) -> AppResult<Vec<EmployeeSummary>> {
        sqlx::query_as::<_, EmployeeSummary>(
            "SELECT e.id, e.dni, e.payroll_number, e.first_name, e.last_name, \
                    p.name AS position_name, s.name AS sector_name \
             FROM employees e \
             LEFT JOIN positions p ON e.position_id = p.id \
             LEFT JOIN sectors s ON e.sector_id = s.id \
             WHERE e.active = TRUE \
             ORDER BY e.last_name, e.first_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("Failed to list active employees", e))
    }

    /// Find an employee by id.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_err("Failed to fetch employee", e))
    }

    /// Fetch the short identification of one employee.
    pub async fn find_summary(&self, id: Uuid) -> AppResult<Option<EmployeeSummary>> {
        sqlx::query_as::<_, EmployeeSummary>(
            "SELECT e.id, e.dni, e.payroll_number, e.first_name, e.last_name, \
                    p.name AS position_name, s.name AS sector_name \
             FROM employees e \
             LEFT JOIN positions p ON e.position_id = p.id \
             LEFT JOIN sectors s ON e.sector_id = s.id \
             WHERE e.id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("Failed to fetch employee summary", e))
    }

    /// Register a new employee.
    pub async fn create(&self, data: &CreateEmployee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees \
                 (dni, payroll_number, first_name, last_name, email, phone, \
                  position_id, sector_id, hire_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(&data.dni)
        .bind(&data.payroll_number)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(data.position_id)
        .bind(data.sector_id)
        .bind(data.hire_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_db_err(
                "Failed to create employee",
                "An employee with that DNI or payroll number already exists",
                e,
            )
        })
    }

    /// Mark an employee inactive. Transaction-scoped.
    pub async fn deactivate(conn: &mut PgConnection, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE employees SET active = FALSE WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| db_err("Failed to deactivate employee", e))?;
        Ok(())
    }

    /// Active/inactive/total staff tallies.
    pub async fn staff_totals(&self) -> AppResult<StaffTotals> {
        sqlx::query_as::<_, StaffTotals>(
            "SELECT COUNT(*) FILTER (WHERE active) AS active_employees, \
                    COUNT(*) FILTER (WHERE NOT active) AS inactive_employees, \
                    COUNT(*) AS total_employees \
             FROM employees",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_err("Failed to compute staff totals", e))
    }
}
