//! WhatsApp channel implementation.
//!
//! The only built-in channel with a hard validation gate: recipients
//! must be digits-only phone numbers, so E.164 strings with a leading
//! `+` are rejected along with anything carrying separators.

use crate::traits::Channel;
use async_trait::async_trait;
use courier_core::RecipientFormat;

/// WhatsApp delivery channel.
#[derive(Debug, Default)]
pub struct WhatsAppChannel;

impl WhatsAppChannel {
    /// Create a new WhatsApp channel.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Channel for WhatsAppChannel {
    fn name(&self) -> &str {
        "WhatsApp"
    }

    fn recipient_format(&self) -> RecipientFormat {
        RecipientFormat::PhoneNumber
    }
}
