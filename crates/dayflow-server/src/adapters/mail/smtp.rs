//! SMTP Mailer
//!
//! lettre-backed transport used for both a custom SMTP relay and Gmail.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use uuid::Uuid;

use dayflow::{DeliveryReceipt, DomainError, EmailProvider, Mailer, OutgoingEmail};

use crate::config::SmtpConfig;

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// SMTP implementation of Mailer
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    provider: EmailProvider,
}

impl SmtpMailer {
    /// Build a transport for `config`. `provider` only labels logs and health checks.
    pub fn new(config: &SmtpConfig, provider: EmailProvider) -> Result<Self, DomainError> {
        let credentials = Credentials::new(config.user.clone(), config.password.clone());

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host).map_err(smtp_error)?
        } else {
            let tls = TlsParameters::new(config.host.clone()).map_err(smtp_error)?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .tls(Tls::Opportunistic(tls))
        };

        let transport = builder
            .port(config.port)
            .credentials(credentials)
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            sender: sender_mailbox(config)?,
            provider,
        })
    }

    fn build_message(&self, email: &OutgoingEmail) -> Result<(Message, String), DomainError> {
        let recipient: Mailbox = email.to.parse().map_err(|e| {
            DomainError::Validation(format!("Invalid recipient address {:?}: {}", email.to, e))
        })?;

        let message_id = format!("<{}@{}>", Uuid::new_v4(), self.sender.email.domain());

        let message = Message::builder()
            .from(self.sender.clone())
            .to(recipient)
            .subject(email.subject.clone())
            .message_id(Some(message_id.clone()))
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .map_err(|e| DomainError::Validation(format!("Failed to build email: {e}")))?;

        Ok((message, message_id))
    }
}

fn sender_mailbox(config: &SmtpConfig) -> Result<Mailbox, DomainError> {
    let address: Address = config.from_email.parse().map_err(|e| {
        DomainError::Validation(format!(
            "Invalid sender address {:?}: {}",
            config.from_email, e
        ))
    })?;
    Ok(Mailbox::new(Some(config.from_name.clone()), address))
}

fn smtp_error(e: lettre::transport::smtp::Error) -> DomainError {
    DomainError::ExternalService(format!("SMTP error: {e}"))
}

#[async_trait]
impl Mailer for SmtpMailer {
    fn provider(&self) -> EmailProvider {
        self.provider
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DomainError> {
        let (message, message_id) = self.build_message(email)?;

        tracing::info!("📤 Sending email via {} to: {}", self.provider.label(), email.to);

        self.transport.send(message).await.map_err(smtp_error)?;

        Ok(DeliveryReceipt {
            message_id: Some(message_id),
        })
    }

    async fn verify(&self) -> Result<(), DomainError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(DomainError::ExternalService(
                "SMTP server did not accept the connection".to_string(),
            )),
            Err(e) => Err(smtp_error(e)),
        }
    }
}
