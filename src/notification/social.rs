//! A delivery channel that posts reports as direct messages on a social platform.

use crate::core::{DeliveryChannel, DeliveryError, DeliveryReceipt, Recipient, Report};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info, instrument};

pub const SOCIAL_CHANNEL: &str = "social";

/// The messaging platform a report is posted to.
#[async_trait]
pub trait SocialTransport: Send + Sync {
    /// Posts a direct message to a platform user.
    async fn post_message(&self, user_id: &str, body: &str) -> anyhow::Result<()>;
}

/// A social transport that only logs the message it would post.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSocialTransport;

#[async_trait]
impl SocialTransport for LoggingSocialTransport {
    async fn post_message(&self, user_id: &str, body: &str) -> anyhow::Result<()> {
        info!(%user_id, bytes = body.len(), "Message handed to logging transport");
        Ok(())
    }
}

/// Delivers reports to the recipient's social-account id.
pub struct SocialMessageChannel {
    transport: Arc<dyn SocialTransport>,
}

impl SocialMessageChannel {
    pub fn new(transport: Arc<dyn SocialTransport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl DeliveryChannel for SocialMessageChannel {
    fn name(&self) -> &str {
        SOCIAL_CHANNEL
    }

    #[instrument(skip_all, fields(channel = SOCIAL_CHANNEL, lines = report.line_count()))]
    async fn deliver(
        &self,
        report: &Report,
        recipient: &Recipient,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let user_id = recipient
            .social_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| DeliveryError::InvalidRecipient {
                channel: SOCIAL_CHANNEL.to_string(),
                reason: "missing social account id".to_string(),
            })?;

        if let Err(e) = self.transport.post_message(user_id, report.as_str()).await {
            error!(error = %e, "Social transport failed");
            return Err(DeliveryError::Transport {
                channel: SOCIAL_CHANNEL.to_string(),
                message: e.to_string(),
            });
        }

        info!(%user_id, "Report posted as social message.");
        Ok(DeliveryReceipt {
            channel: SOCIAL_CHANNEL.to_string(),
            recipient: user_id.to_string(),
            lines: report.line_count(),
        })
    }
}
