//! Core domain types and service traits for logdispatch
//!
//! This module defines the data structures that flow from the formatter to
//! the delivery channels, and the single capability trait every channel
//! implements.

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One recorded user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow {
    actor: String,
    action: String,
    timestamp: String,
}

impl LogRow {
    /// Creates a row with an explicit timestamp.
    pub fn new(
        actor: impl Into<String>,
        action: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            actor: actor.into(),
            action: action.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Creates a row stamped with the current UTC time.
    pub fn now(actor: impl Into<String>, action: impl Into<String>) -> Self {
        Self::new(actor, action, Utc::now().to_rfc3339())
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    /// RFC 3339 timestamp of the action.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// Destination of a report.
///
/// A recipient may be reachable through several channels; each channel reads
/// the identifier it understands and rejects the recipient if it is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipient {
    /// Email address, used by the email channel.
    pub email: Option<String>,
    /// Platform user id, used by the social message channel.
    pub social_id: Option<String>,
}

impl Recipient {
    /// A recipient reachable by email only.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            social_id: None,
        }
    }

    /// A recipient reachable on the social platform only.
    pub fn with_social_id(id: impl Into<String>) -> Self {
        Self {
            email: None,
            social_id: Some(id.into()),
        }
    }
}

/// A formatted activity report, one line per log row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report(String);

impl Report {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of lines in the report. An empty report has zero lines.
    pub fn line_count(&self) -> usize {
        if self.0.is_empty() {
            0
        } else {
            self.0.split('\n').count()
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Report {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl AsRef<str> for Report {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of a successful delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    /// Name of the channel that delivered the report.
    pub channel: String,
    /// The channel-specific identifier the report was sent to.
    pub recipient: String,
    /// Number of report lines delivered.
    pub lines: usize,
}

/// Errors raised by delivery channels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("invalid recipient for {channel}: {reason}")]
    InvalidRecipient { channel: String, reason: String },

    #[error("{channel} transport failed: {message}")]
    Transport { channel: String, message: String },

    #[error("unknown delivery channel: {0}")]
    UnknownChannel(String),
}

// =============================================================================
// Service Traits
// =============================================================================

/// Hands a report to a recipient through some transport.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    /// A unique, descriptive name for the channel (e.g., "email", "social").
    /// Used for lookup, logging and receipts.
    fn name(&self) -> &str;

    /// Delivers the report to the recipient.
    ///
    /// # Returns
    /// * `Ok(DeliveryReceipt)` if the transport accepted the report
    /// * `Err(DeliveryError)` if the recipient is unusable for this channel or
    ///   the transport failed
    async fn deliver(
        &self,
        report: &Report,
        recipient: &Recipient,
    ) -> Result<DeliveryReceipt, DeliveryError>;
}
