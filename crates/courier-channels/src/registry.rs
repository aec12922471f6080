//! Channel registry: case-insensitive name lookup over shared channels.

use crate::error::ChannelError;
use crate::facebook::FacebookChannel;
use crate::instagram::InstagramChannel;
use crate::telegram::TelegramChannel;
use crate::traits::Channel;
use crate::whatsapp::WhatsAppChannel;
use crate::Result;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry of delivery channels keyed by lower-cased name.
///
/// Built once at startup and read-only afterwards. Channels are
/// stateless shared instances, so the registry needs no locking and is
/// safe to share across concurrent callers.
#[derive(Debug)]
pub struct ChannelRegistry {
    /// Registered channels by lower-cased name.
    channels: HashMap<String, Arc<dyn Channel>>,
}

impl Default for ChannelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The built-in provider set, in registration order.
pub(crate) fn default_channel_set() -> [Arc<dyn Channel>; 4] {
    [
        Arc::new(WhatsAppChannel::new()),
        Arc::new(TelegramChannel::new()),
        Arc::new(FacebookChannel::new()),
        Arc::new(InstagramChannel::new()),
    ]
}

impl ChannelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            channels: HashMap::new(),
        }
    }

    /// Create a registry wired with the built-in providers.
    pub fn with_default_channels() -> Self {
        let mut registry = Self::new();
        for channel in default_channel_set() {
            registry.register(channel);
        }
        registry
    }

    /// Register a channel under its lower-cased name.
    ///
    /// A channel already registered under the same key is replaced and
    /// returned, so callers can deliberately override a built-in.
    pub fn register(&mut self, channel: Arc<dyn Channel>) -> Option<Arc<dyn Channel>> {
        let key = channel.name().to_lowercase();
        debug!("Registering channel: {}", key);
        let replaced = self.channels.insert(key, channel);
        if let Some(previous) = &replaced {
            warn!("Replaced previously registered channel: {}", previous.name());
        }
        replaced
    }

    /// Look up a channel by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&dyn Channel> {
        self.channels
            .get(&name.to_lowercase())
            .map(|channel| channel.as_ref())
    }

    /// Look up a channel by name, erroring when absent.
    pub fn require(&self, name: &str) -> Result<&dyn Channel> {
        self.get(name)
            .ok_or_else(|| ChannelError::unknown_channel(name))
    }

    /// Check whether a channel is registered under `name`, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.channels.contains_key(&name.to_lowercase())
    }

    /// Registered keys (lower-cased names), in no particular order.
    pub fn names(&self) -> Vec<&str> {
        self.channels.keys().map(String::as_str).collect()
    }

    /// Number of registered channels.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True when no channels are registered.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
