//! Formats log rows into a report and hands it to a delivery channel.

use crate::core::{DeliveryChannel, DeliveryError, DeliveryReceipt, LogRow, Recipient};
use crate::formatting::{PlainTextFormatter, ReportFormatter};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// The `ReportDispatcher`.
///
/// Holds a formatter and a default channel. It never inspects the concrete
/// channel type and never retries; a failed delivery is returned as-is.
pub struct ReportDispatcher<F: ReportFormatter = PlainTextFormatter> {
    formatter: F,
    default_channel: Arc<dyn DeliveryChannel>,
}

impl ReportDispatcher<PlainTextFormatter> {
    /// Creates a dispatcher using the plain-text formatter.
    pub fn new(default_channel: Arc<dyn DeliveryChannel>) -> Self {
        Self::with_formatter(PlainTextFormatter, default_channel)
    }
}

impl<F: ReportFormatter> ReportDispatcher<F> {
    pub fn with_formatter(formatter: F, default_channel: Arc<dyn DeliveryChannel>) -> Self {
        Self {
            formatter,
            default_channel,
        }
    }

    /// Name of the channel used by [`dispatch`](Self::dispatch).
    pub fn default_channel(&self) -> &str {
        self.default_channel.name()
    }

    /// Formats `rows` and delivers the report through the default channel.
    pub async fn dispatch(
        &self,
        rows: &[LogRow],
        recipient: &Recipient,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        self.dispatch_via(rows, recipient, self.default_channel.as_ref())
            .await
    }

    /// Formats `rows` and delivers the report through `channel`.
    #[instrument(skip_all, fields(channel = channel.name(), rows = rows.len()))]
    pub async fn dispatch_via(
        &self,
        rows: &[LogRow],
        recipient: &Recipient,
        channel: &dyn DeliveryChannel,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let report = self.formatter.format(rows);
        debug!(lines = report.line_count(), "Report formatted.");

        match channel.deliver(&report, recipient).await {
            Ok(receipt) => {
                info!(recipient = %receipt.recipient, "Report dispatched.");
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, "Report delivery failed.");
                Err(e)
            }
        }
    }
}
