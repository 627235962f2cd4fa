//! Staff directory services: employees, positions, sectors.

pub mod employee;
pub mod position;
pub mod sector;

pub use employee::EmployeeService;
pub use position::PositionService;
pub use sector::SectorService;
