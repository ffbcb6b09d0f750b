//! A named set of delivery channels.
//!
//! The registry lets callers pick a channel at runtime (e.g., from the
//! command line) without the dispatcher knowing which channels exist.

use crate::core::{DeliveryChannel, DeliveryError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Clone, Default)]
pub struct ChannelRegistry {
    channels: BTreeMap<String, Arc<dyn DeliveryChannel>>,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a channel under its own name, replacing any previous channel with that name.
    pub fn register(&mut self, channel: Arc<dyn DeliveryChannel>) -> &mut Self {
        let name = channel.name().to_string();
        debug!(channel = %name, "Registering delivery channel");
        self.channels.insert(name, channel);
        self
    }

    /// Looks up a channel by name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn DeliveryChannel>, DeliveryError> {
        self.channels
            .get(name)
            .cloned()
            .ok_or_else(|| DeliveryError::UnknownChannel(name.to_string()))
    }

    /// Registered channel names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.channels.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
