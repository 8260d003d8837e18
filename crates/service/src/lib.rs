//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business rules (allow-list, referential existence, uniqueness,
//!   soft-delete state) from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
pub mod lookup;
pub mod department_service;
pub mod employee_service;
#[cfg(test)]
pub mod test_support;

pub use department_service::DepartmentService;
pub use employee_service::EmployeeService;
pub use lookup::DepartmentLookup;
