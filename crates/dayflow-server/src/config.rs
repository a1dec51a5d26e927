//! Server Configuration
//!
//! Read once at startup from Shuttle secrets. Everything goes through a
//! `Fn(&str) -> Option<String>` lookup so tests can feed a plain map.

use chrono_tz::Tz;
use thiserror::Error;

use dayflow::EmailProvider;

const DEFAULT_RESEND_FROM: &str = "DayFlow HRMS <onboarding@resend.dev>";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_SMTP_FROM_NAME: &str = "DayFlow HRMS";

pub const GMAIL_SMTP_HOST: &str = "smtp.gmail.com";
pub const GMAIL_SMTP_PORT: u16 = 465;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Hosted email API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendConfig {
    pub api_key: String,
    /// Full `Name <address>` sender
    pub from: String,
}

/// SMTP settings, shared by the custom and Gmail transports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Implicit TLS from the first byte; otherwise STARTTLS when offered
    pub secure: bool,
    pub user: String,
    pub password: String,
    /// `SMTP_FROM`, else the login user
    pub from_email: String,
    pub from_name: String,
}

/// Selected email transport, chosen once at process start
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailConfig {
    Resend(ResendConfig),
    Smtp(SmtpConfig),
    Gmail(SmtpConfig),
    Disabled,
}

impl EmailConfig {
    /// Pick a transport by priority: hosted API, full SMTP, Gmail, none
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| trimmed(lookup(key));

        if let Some(api_key) = get("RESEND_API_KEY") {
            return Ok(Self::Resend(ResendConfig {
                api_key,
                from: get("RESEND_FROM_EMAIL").unwrap_or_else(|| DEFAULT_RESEND_FROM.to_string()),
            }));
        }

        let (user, password) = match (get("SMTP_USER"), get("SMTP_PASSWORD")) {
            (Some(user), Some(password)) => (user, password),
            _ => return Ok(Self::Disabled),
        };

        let from_email = get("SMTP_FROM").unwrap_or_else(|| user.clone());
        let from_name = get("SMTP_FROM_NAME").unwrap_or_else(|| DEFAULT_SMTP_FROM_NAME.to_string());

        match get("SMTP_HOST") {
            Some(host) => {
                let port = match get("SMTP_PORT") {
                    Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                        key: "SMTP_PORT",
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?,
                    None => DEFAULT_SMTP_PORT,
                };
                Ok(Self::Smtp(SmtpConfig {
                    host,
                    port,
                    secure: get("SMTP_SECURE").as_deref() == Some("true"),
                    user,
                    password,
                    from_email,
                    from_name,
                }))
            }
            None => Ok(Self::Gmail(SmtpConfig {
                host: GMAIL_SMTP_HOST.to_string(),
                port: GMAIL_SMTP_PORT,
                secure: true,
                user,
                password,
                from_email,
                from_name,
            })),
        }
    }

    pub fn provider(&self) -> EmailProvider {
        match self {
            EmailConfig::Resend(_) => EmailProvider::Resend,
            EmailConfig::Smtp(_) => EmailProvider::Smtp,
            EmailConfig::Gmail(_) => EmailProvider::Gmail,
            EmailConfig::Disabled => EmailProvider::Disabled,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer key for `/api` routes; `None` disables the check
    pub api_key: Option<String>,
    /// Timezone the dashboard's "today" is computed in
    pub timezone: Tz,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = trimmed(lookup("DAYFLOW_API_KEY"));

        let timezone = match trimmed(lookup("DAYFLOW_TIMEZONE")) {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: "DAYFLOW_TIMEZONE",
                    value: name.clone(),
                    reason: e.to_string(),
                })?,
            None => Tz::UTC,
        };

        let email = EmailConfig::from_lookup(&lookup)?;

        Ok(Self {
            api_key,
            timezone,
            email,
        })
    }
}

/// Surrounding whitespace dropped; blank counts as unset
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
