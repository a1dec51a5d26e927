//! Mailer Port
//!
//! Abstract interface for outbound email transports.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, DeliveryReceipt, EmailProvider, OutgoingEmail};

/// Outbound email transport
///
/// One implementation per provider family. Each call is a single attempt;
/// retry policy, if any, belongs to the caller.
///
/// # Example
///
/// ```rust,ignore
/// use dayflow::ports::Mailer;
///
/// struct SmtpMailer { /* lettre transport */ }
///
/// #[async_trait]
/// impl Mailer for SmtpMailer {
///     fn provider(&self) -> EmailProvider { EmailProvider::Smtp }
///     async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DomainError> {
///         // Build a multipart message and hand it to the transport
///     }
///     async fn verify(&self) -> Result<(), DomainError> { /* connect + auth */ }
/// }
/// ```
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Which provider this transport talks to
    fn provider(&self) -> EmailProvider;

    /// Deliver one message
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, DomainError>;

    /// Check that the transport is usable without sending anything
    async fn verify(&self) -> Result<(), DomainError>;
}
