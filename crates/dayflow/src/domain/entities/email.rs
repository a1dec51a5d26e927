//! Outgoing Email - A rendered message ready for a transport

use serde::{Deserialize, Serialize};

/// Rendered email addressed to a single recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

/// Transport acknowledgement
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Provider-assigned message id, when the transport reports one
    pub message_id: Option<String>,
}
