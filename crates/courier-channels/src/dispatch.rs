//! Dispatcher: routes (channel name, recipient, message) to a channel.

use crate::registry::{default_channel_set, ChannelRegistry};
use crate::traits::Channel;
use crate::Result;
use chrono::Utc;
use courier_core::{DeliveryResult, Message, RejectReason, ValidationOutcome};
use std::sync::Arc;
use tracing::{debug, warn};

/// Routes outbound messages to registered channels.
///
/// The dispatcher holds no format policy of its own: it resolves the
/// channel, lets the channel validate, then calls `deliver`. Stateless
/// after construction and safe to share across concurrent callers.
#[derive(Debug)]
pub struct Dispatcher {
    registry: ChannelRegistry,
}

impl Dispatcher {
    /// Create a dispatcher over an explicit registry.
    pub fn new(registry: ChannelRegistry) -> Self {
        Self { registry }
    }

    /// Create a dispatcher wired with the built-in providers.
    pub fn with_default_channels() -> Self {
        Self::new(ChannelRegistry::with_default_channels())
    }

    /// Start building a dispatcher channel by channel.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Get the registry backing this dispatcher.
    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Send `message` to `recipient` over the named channel.
    ///
    /// Rejections (unknown channel, hard validation failure) come back
    /// inside the [`DeliveryResult`] and cause no delivery side effect.
    /// The `Err` arm is reserved for transport faults.
    pub async fn send(
        &self,
        channel_name: &str,
        recipient: &str,
        message: &Message,
    ) -> Result<DeliveryResult> {
        let channel = match self.registry.get(channel_name) {
            Some(channel) => channel,
            None => {
                warn!("Unknown channel requested: {}", channel_name);
                return Ok(DeliveryResult::rejected(RejectReason::UnknownChannel {
                    name: channel_name.to_string(),
                }));
            }
        };

        match channel.validate(recipient) {
            ValidationOutcome::Invalid { reason } => {
                warn!(
                    "Rejected send via {} to {}: {}",
                    channel.name(),
                    recipient,
                    reason
                );
                Ok(DeliveryResult::rejected(
                    RejectReason::InvalidRecipientFormat {
                        channel: channel.name().to_string(),
                        error: reason,
                    },
                ))
            }
            ValidationOutcome::Valid { kind } => {
                debug!(
                    "Routing {} message via {} to {} ({})",
                    message.content_kind(),
                    channel.name(),
                    recipient,
                    kind
                );
                let receipt = channel.deliver(&message.content(), recipient).await?;
                Ok(DeliveryResult::delivered(receipt))
            }
            ValidationOutcome::ValidWithWarning { warning, .. } => {
                warn!(
                    "Recipient {} on {}: {}",
                    recipient,
                    channel.name(),
                    warning
                );
                let receipt = channel.deliver(&message.content(), recipient).await?;
                Ok(DeliveryResult::delivered_with_warning(receipt, warning))
            }
        }
    }

    /// Build a text message stamped now and send it.
    pub async fn send_text(
        &self,
        channel_name: &str,
        recipient: &str,
        text: impl Into<String>,
    ) -> Result<DeliveryResult> {
        let message = Message::new_text(text, Utc::now());
        self.send(channel_name, recipient, &message).await
    }
}

/// Builder for [`Dispatcher`].
#[derive(Debug, Default)]
pub struct DispatcherBuilder {
    registry: ChannelRegistry,
}

impl DispatcherBuilder {
    /// Create a new builder with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a channel; a same-named channel added earlier is replaced.
    pub fn channel(mut self, channel: Arc<dyn Channel>) -> Self {
        self.registry.register(channel);
        self
    }

    /// Add the built-in provider set.
    pub fn default_channels(mut self) -> Self {
        for channel in default_channel_set() {
            self.registry.register(channel);
        }
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> Dispatcher {
        Dispatcher::new(self.registry)
    }
}
