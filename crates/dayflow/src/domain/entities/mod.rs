//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Employee: Staff identity with optional payroll snapshot
//! - AttendanceRecord: Daily attendance
//! - LeaveRequest: Leave applications
//! - OutgoingEmail: Rendered notification message

mod attendance;
mod email;
mod employee;
mod leave_request;

pub use attendance::*;
pub use email::*;
pub use employee::*;
pub use leave_request::*;
