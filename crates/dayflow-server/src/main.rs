use axum::Json;
use chrono_tz::Tz;
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;

use dayflow::{AttendanceRepository, EmailProvider, EmployeeRepository, LeaveRepository, Mailer};

mod adapters;
mod application;
mod auth;
mod config;
mod models;
mod routes;

use adapters::{build_mailer, PgAttendanceRepository, PgEmployeeRepository, PgLeaveRepository};
use application::{DashboardService, NotificationService, OtpService};
use auth::ApiKey;
use config::AppConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService>,
    pub notification_service: Arc<NotificationService>,
    pub otp_service: Arc<OtpService>,
    pub employee_repo: Arc<dyn EmployeeRepository>,
    pub attendance_repo: Arc<dyn AttendanceRepository>,
    pub leave_repo: Arc<dyn LeaveRepository>,
}

impl AppState {
    /// Wire the application services over the given ports
    pub fn new(
        employee_repo: Arc<dyn EmployeeRepository>,
        attendance_repo: Arc<dyn AttendanceRepository>,
        leave_repo: Arc<dyn LeaveRepository>,
        mailer: Option<Arc<dyn Mailer>>,
        timezone: Tz,
    ) -> Self {
        let dashboard_service = Arc::new(DashboardService::new(
            employee_repo.clone(),
            attendance_repo.clone(),
            leave_repo.clone(),
            timezone,
        ));
        let notification_service = Arc::new(NotificationService::new(mailer));
        let otp_service = Arc::new(OtpService::new(notification_service.clone()));

        Self {
            dashboard_service,
            notification_service,
            otp_service,
            employee_repo,
            attendance_repo,
            leave_repo,
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "DayFlow HRMS API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("🗓️  DayFlow API initializing...");

    let config = AppConfig::from_lookup(|key| secrets.get(key))
        .map_err(|e| shuttle_runtime::Error::Custom(anyhow::anyhow!(e)))?;

    let api_key = ApiKey::new(config.api_key.clone());
    if api_key.is_enabled() {
        tracing::info!("🔐 API key authentication enabled");
    } else {
        tracing::warn!("⚠️  No DAYFLOW_API_KEY set - authentication disabled");
    }

    // Run migrations
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| {
            shuttle_runtime::Error::Custom(anyhow::anyhow!("Failed to run database migrations: {e}"))
        })?;

    tracing::info!("✅ Database migrations completed");

    // Email transport, chosen once
    let mailer = build_mailer(&config.email)
        .map_err(|e| shuttle_runtime::Error::Custom(anyhow::anyhow!(e)))?;

    tracing::info!("🌐 Dashboard timezone: {}", config.timezone);

    let state = AppState::new(
        Arc::new(PgEmployeeRepository::new(pool.clone())),
        Arc::new(PgAttendanceRepository::new(pool.clone())),
        Arc::new(PgLeaveRepository::new(pool)),
        mailer,
        config.timezone,
    );

    match state.notification_service.provider() {
        EmailProvider::Disabled => {
            tracing::warn!("⚠️  No email provider configured - OTPs will be logged")
        }
        provider => tracing::info!("📧 Email provider: {}", provider.label()),
    }

    let router = routes::app(state, api_key);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ DayFlow API ready");

    Ok(router.into())
}
