//! Employee directory operations.

use std::sync::Arc;

use tracing::info;

use medistaff_core::error::AppError;
use medistaff_core::result::AppResult;
use medistaff_database::repositories::employee::EmployeeRepository;
use medistaff_entity::employee::{CreateEmployee, Employee, EmployeeDetail, EmployeeSummary};

/// Handles employee registration and listings.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    /// Employee repository.
    employees: Arc<EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new employee service.
    pub fn new(employees: Arc<EmployeeRepository>) -> Self {
        Self { employees }
    }

    /// List all employees with position and sector names.
    pub async fn list(&self) -> AppResult<Vec<EmployeeDetail>> {
        self.employees.list_detailed().await
    }

    /// List active employees in short form.
    pub async fn list_active(&self) -> AppResult<Vec<EmployeeSummary>> {
        self.employees.list_active_summaries().await
    }

    /// Register a new employee.
    ///
    /// Duplicate DNI or payroll numbers surface as conflict errors from the
    /// storage layer's unique constraints.
    pub async fn create(&self, data: CreateEmployee) -> AppResult<Employee> {
        let missing = missing_required_fields(&data);
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let employee = self.employees.create(&data).await?;
        info!(employee_id = %employee.id, dni = %employee.dni, "Employee registered");
        Ok(employee)
    }
}

/// Names of the required employee fields that are empty.
fn missing_required_fields(data: &CreateEmployee) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if data.dni.trim().is_empty() {
        missing.push("dni");
    }
    if data.payroll_number.trim().is_empty() {
        missing.push("payroll_number");
    }
    if data.first_name.trim().is_empty() {
        missing.push("first_name");
    }
    if data.last_name.trim().is_empty() {
        missing.push("last_name");
    }
    if data.email.trim().is_empty() {
        missing.push("email");
    }
    if data.phone.trim().is_empty() {
        missing.push("phone");
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CreateEmployee {
        CreateEmployee {
            dni: "27888999".to_string(),
            payroll_number: "L-0310".to_string(),
            first_name: "Marta".to_string(),
            last_name: "Ríos".to_string(),
            email: "mrios@hospital.test".to_string(),
            phone: "11-5555-0000".to_string(),
            position_id: None,
            sector_id: None,
            hire_date: "2023-03-01".parse().unwrap(),
        }
    }

    #[test]
    fn test_complete_draft_has_no_missing_fields() {
        assert!(missing_required_fields(&draft()).is_empty());
    }

    #[test]
    fn test_missing_fields_are_enumerated() {
        let mut data = draft();
        data.dni = String::new();
        data.phone = "  ".to_string();
        assert_eq!(missing_required_fields(&data), vec!["dni", "phone"]);
    }
}
