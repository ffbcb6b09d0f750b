//! Delivery channels for formatted reports.
//!
//! Each channel implements the `DeliveryChannel` capability and wraps an
//! opaque transport. The dispatcher only ever sees the capability, so new
//! channels can be added here (or in downstream crates) without touching it.
pub mod email;
pub mod registry;
pub mod social;

pub use email::{EmailChannel, LoggingMailTransport, MailTransport};
pub use registry::ChannelRegistry;
pub use social::{LoggingSocialTransport, SocialMessageChannel, SocialTransport};
