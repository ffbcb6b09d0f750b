/// logdispatch - activity reports delivered through pluggable channels
///
/// This library formats log rows into a textual report and hands the report
/// to a delivery channel chosen by the caller. The dispatcher only depends on
/// the `DeliveryChannel` capability, so channels can be added freely.
pub mod notification;

pub mod cli;
pub mod config;
pub mod core;
pub mod dispatcher;
pub mod formatting;
pub mod rows;
pub mod services;

// Re-export core types for convenience
pub use crate::core::*;
pub use dispatcher::ReportDispatcher;
pub use formatting::{PlainTextFormatter, ReportFormatter};

/// Renders a receipt for stdout in the configured format.
pub fn render_receipt(
    receipt: &DeliveryReceipt,
    format: config::OutputFormat,
) -> anyhow::Result<String> {
    let rendered = match format {
        config::OutputFormat::Json => serde_json::to_string(receipt)?,
        config::OutputFormat::PlainText => format!(
            "Delivered {} line(s) via {} to {}",
            receipt.lines, receipt.channel, receipt.recipient
        ),
    };
    Ok(rendered)
}
