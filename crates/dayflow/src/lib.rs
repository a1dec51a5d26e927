//! DayFlow Domain Library
//!
//! Core domain types and interfaces for the DayFlow HRMS back end.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Employee, AttendanceRecord, LeaveRequest, OutgoingEmail)
//!   - `value_objects/`: Immutable value types (AttendanceStatus, LeaveStatus, EmailProvider, OtpCode)
//!   - `services/`: Dashboard fold, day window, rupee formatting, OTP template, TTL cache
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Read-side data access
//!   - `services/`: Outbound email transport
//!
//! # Usage
//!
//! ```rust,ignore
//! use dayflow::domain::{DashboardSummary, DayWindow};
//! use dayflow::ports::{EmployeeRepository, Mailer};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    format_inr, initials, render_otp_email, AttendanceRecord, AttendanceStatus,
    DashboardSummary, DayWindow, DeliveryReceipt, DomainError, EmailProvider, Employee,
    LeaveRequest, LeaveStatus, OtpCode, OutgoingEmail, PayrollSnapshot, TtlCache,
    OTP_VALIDITY_MINUTES, RECENT_LEAVE_LIMIT,
};
pub use ports::{
    // Repositories
    AttendanceRepository,
    EmployeeRepository,
    LeaveRepository,
    // Services
    Mailer,
};
