//! A delivery channel that sends reports by email.

use crate::core::{DeliveryChannel, DeliveryError, DeliveryReceipt, Recipient, Report};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

pub const EMAIL_CHANNEL: &str = "email";

/// The mail system a report is handed to.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Sends a message to a single address.
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// A mail transport that only logs the message it would send.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMailTransport;

#[async_trait]
impl MailTransport for LoggingMailTransport {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> anyhow::Result<()> {
        info!(%to, %subject, bytes = body.len(), "Mail handed to logging transport");
        Ok(())
    }
}

/// Delivers reports to the recipient's email address.
pub struct EmailChannel {
    transport: Arc<dyn MailTransport>,
    subject: String,
}

impl EmailChannel {
    pub fn new(transport: Arc<dyn MailTransport>, subject: impl Into<String>) -> Self {
        Self {
            transport,
            subject: subject.into(),
        }
    }

    fn address<'a>(&self, recipient: &'a Recipient) -> Result<&'a str, DeliveryError> {
        let email = recipient
            .email
            .as_deref()
            .ok_or_else(|| invalid("missing email address"))?;

        if !is_valid_email(email) {
            return Err(invalid(&format!("malformed email address '{}'", email)));
        }
        Ok(email)
    }
}

fn invalid(reason: &str) -> DeliveryError {
    DeliveryError::InvalidRecipient {
        channel: EMAIL_CHANNEL.to_string(),
        reason: reason.to_string(),
    }
}

/// Checks for a single `@` with a non-empty local part and a dotted domain
/// whose labels are non-empty and do not start or end with `-`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && domain
                    .split('.')
                    .all(|label| !label.is_empty() && !label.starts_with('-') && !label.ends_with('-'))
        }
        None => false,
    }
}

#[async_trait]
impl DeliveryChannel for EmailChannel {
    fn name(&self) -> &str {
        EMAIL_CHANNEL
    }

    #[instrument(skip_all, fields(channel = EMAIL_CHANNEL, lines = report.line_count()))]
    async fn deliver(
        &self,
        report: &Report,
        recipient: &Recipient,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let to = self.address(recipient)?;

        self.transport
            .send_mail(to, &self.subject, report.as_str())
            .await
            .map_err(|e| {
                error!(error = %e, "Mail transport failed");
                DeliveryError::Transport {
                    channel: EMAIL_CHANNEL.to_string(),
                    message: e.to_string(),
                }
            })?;

        info!(%to, "Report delivered by email.");
        Ok(DeliveryReceipt {
            channel: EMAIL_CHANNEL.to_string(),
            recipient: to.to_string(),
            lines: report.line_count(),
        })
    }
}
