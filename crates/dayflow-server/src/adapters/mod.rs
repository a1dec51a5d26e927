//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod mail;
pub mod postgres;

// Re-exports
pub use mail::{build_mailer, ResendMailer, SmtpMailer};
pub use postgres::{PgAttendanceRepository, PgEmployeeRepository, PgLeaveRepository};
