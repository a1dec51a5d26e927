//! Employee Repository Port
//!
//! Read-only listing of employees. Lifecycle writes live elsewhere.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Employee};

/// Repository interface for Employee entities
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// List all employees, optionally with their latest payroll attached
    async fn list(&self, include_payroll: bool) -> Result<Vec<Employee>, DomainError>;
}
