//! PostgreSQL Repository Implementations

mod attendance_repository;
mod employee_repository;
mod leave_repository;

pub use attendance_repository::PgAttendanceRepository;
pub use employee_repository::PgEmployeeRepository;
pub use leave_repository::PgLeaveRepository;
