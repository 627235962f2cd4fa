//! Employee entity.

pub mod model;

pub use model::{CreateEmployee, Employee, EmployeeDetail, EmployeeSummary};
