//! In-memory port fakes shared by application and route tests

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use dayflow::{
    AttendanceRecord, AttendanceRepository, AttendanceStatus, DeliveryReceipt, DomainError,
    EmailProvider, Employee, EmployeeRepository, LeaveRepository, LeaveRequest, LeaveStatus,
    Mailer, OutgoingEmail, PayrollSnapshot,
};

pub fn employee(net_salary: Option<i64>) -> Employee {
    Employee {
        id: Uuid::new_v4(),
        full_name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        department: "Engineering".to_string(),
        designation: "Engineer".to_string(),
        payroll: net_salary.map(|net| PayrollSnapshot {
            month: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            basic_salary: Decimal::from(net),
            deductions: Decimal::ZERO,
            net_salary: Decimal::from(net),
        }),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub fn attendance_record(date: DateTime<Utc>, status: AttendanceStatus) -> AttendanceRecord {
    AttendanceRecord {
        id: Uuid::new_v4(),
        employee_id: Uuid::new_v4(),
        date,
        status,
        check_in: None,
        check_out: None,
    }
}

/// Leave request created `age_days` before 2026-03-10
pub fn leave_request(status: LeaveStatus, age_days: i64) -> LeaveRequest {
    LeaveRequest {
        id: Uuid::new_v4(),
        employee_id: Uuid::new_v4(),
        employee_name: "Ravi Kumar".to_string(),
        leave_type: "CASUAL".to_string(),
        days: 1,
        status,
        created_at: Utc.with_ymd_and_hms(2026, 3, 10, 0, 0, 0).unwrap()
            - TimeDelta::days(age_days),
    }
}

fn failure(message: &Option<String>) -> Result<(), DomainError> {
    match message {
        Some(m) => Err(DomainError::Repository(m.clone())),
        None => Ok(()),
    }
}

pub struct FakeEmployees {
    employees: Vec<Employee>,
    error: Option<String>,
}

impl FakeEmployees {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self {
            employees,
            error: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            employees: vec![],
            error: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl EmployeeRepository for FakeEmployees {
    async fn list(&self, include_payroll: bool) -> Result<Vec<Employee>, DomainError> {
        failure(&self.error)?;
        Ok(self
            .employees
            .iter()
            .cloned()
            .map(|mut e| {
                if !include_payroll {
                    e.payroll = None;
                }
                e
            })
            .collect())
    }
}

#[derive(Clone)]
pub struct FakeAttendance {
    records: Vec<AttendanceRecord>,
    error: Option<String>,
    requested: Arc<Mutex<Vec<(DateTime<Utc>, DateTime<Utc>)>>>,
}

impl FakeAttendance {
    pub fn new(records: Vec<AttendanceRecord>) -> Self {
        Self {
            records,
            error: None,
            requested: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::new(vec![])
        }
    }

    pub fn requested_windows(&self) -> Vec<(DateTime<Utc>, DateTime<Utc>)> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl AttendanceRepository for FakeAttendance {
    async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<AttendanceRecord>, DomainError> {
        self.requested.lock().unwrap().push((start, end));
        failure(&self.error)?;
        Ok(self
            .records
            .iter()
            .filter(|r| start <= r.date && r.date < end)
            .cloned()
            .collect())
    }
}

pub struct FakeLeaves {
    leaves: Vec<LeaveRequest>,
    error: Option<String>,
}

impl FakeLeaves {
    pub fn new(leaves: Vec<LeaveRequest>) -> Self {
        Self {
            leaves,
            error: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            leaves: vec![],
            error: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl LeaveRepository for FakeLeaves {
    async fn list(&self, status: Option<LeaveStatus>) -> Result<Vec<LeaveRequest>, DomainError> {
        failure(&self.error)?;
        let mut leaves: Vec<LeaveRequest> = self
            .leaves
            .iter()
            .filter(|l| status.map_or(true, |s| l.status == s))
            .cloned()
            .collect();
        leaves.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leaves)
    }
}

/// Mailer that records every message handed to it
#[derive(Clone)]
pub struct FakeMailer {
    provider: EmailProvider,
    error: Option<String>,
    sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl FakeMailer {
    pub fn new(provider: EmailProvider) -> Self {
        Self {
            provider,
            error: None,
            sent: Arc::default(),
        }
    }

    /// Every send and verify fails with `message`
    pub fn failing(provider: EmailProvider, message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Self::new(provider)
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    fn provider(&self) -> EmailProvider {
        self.provider
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DomainError> {
        self.sent.lock().unwrap().push(email.clone());
        match &self.error {
            Some(m) => Err(DomainError::ExternalService(m.clone())),
            None => Ok(DeliveryReceipt {
                message_id: Some(format!("fake-{}", Uuid::new_v4())),
            }),
        }
    }

    async fn verify(&self) -> Result<(), DomainError> {
        match &self.error {
            Some(m) => Err(DomainError::ExternalService(m.clone())),
            None => Ok(()),
        }
    }
}

/// Shared buffer a test subscriber formats log lines into
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
