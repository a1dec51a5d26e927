//! Leave Repository Port

use async_trait::async_trait;

use crate::domain::{errors::DomainError, LeaveRequest, LeaveStatus};

/// Repository interface for LeaveRequest entities
#[async_trait]
pub trait LeaveRepository: Send + Sync {
    /// List leave requests, newest first, optionally filtered by status
    async fn list(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>, DomainError>;
}
