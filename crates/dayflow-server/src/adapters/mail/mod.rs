//! Email Transport Implementations

mod resend;
mod smtp;

use std::sync::Arc;

use dayflow::{DomainError, Mailer};

use crate::config::EmailConfig;

pub use resend::ResendMailer;
pub use smtp::SmtpMailer;

/// Build the transport selected by `config`, or `None` when email is disabled
pub fn build_mailer(config: &EmailConfig) -> Result<Option<Arc<dyn Mailer>>, DomainError> {
    let provider = config.provider();
    let mailer: Arc<dyn Mailer> = match config {
        EmailConfig::Resend(resend) => Arc::new(ResendMailer::new(resend)?),
        EmailConfig::Smtp(smtp) | EmailConfig::Gmail(smtp) => {
            Arc::new(SmtpMailer::new(smtp, provider)?)
        }
        EmailConfig::Disabled => return Ok(None),
    };
    Ok(Some(mailer))
}
