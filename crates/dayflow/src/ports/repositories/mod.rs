//! Repository Ports
//!
//! Abstract interfaces for the read queries the dashboard depends on.

mod attendance_repository;
mod employee_repository;
mod leave_repository;

pub use attendance_repository::*;
pub use employee_repository::*;
pub use leave_repository::*;
