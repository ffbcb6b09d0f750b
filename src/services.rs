//! Encapsulation for setting up the delivery channels.

use crate::{
    config::Config,
    core::DeliveryChannel,
    dispatcher::ReportDispatcher,
    notification::{
        ChannelRegistry, EmailChannel, LoggingMailTransport, LoggingSocialTransport,
        SocialMessageChannel,
    },
};
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Registers the built-in channels, backed by the logging transports.
pub fn default_registry(config: &Config) -> ChannelRegistry {
    let mut registry = ChannelRegistry::new();
    registry
        .register(Arc::new(EmailChannel::new(
            Arc::new(LoggingMailTransport),
            config.email.subject.clone(),
        )))
        .register(Arc::new(SocialMessageChannel::new(Arc::new(
            LoggingSocialTransport,
        ))));
    registry
}

/// Builds a dispatcher whose default channel is the configured one.
///
/// Fails if `default_channel` names a channel that is not registered.
pub fn setup_dispatcher(config: &Config, registry: &ChannelRegistry) -> Result<ReportDispatcher> {
    let channel: Arc<dyn DeliveryChannel> = registry.get(&config.default_channel)?;
    info!(
        channel = %config.default_channel,
        available = ?registry.names(),
        "Dispatcher configured."
    );
    Ok(ReportDispatcher::new(channel))
}
