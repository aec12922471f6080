//! Telegram channel implementation.
//!
//! Telegram accepts both phone numbers and `@` usernames. Digits are
//! classified as a phone, an `@` prefix as a username; anything else is
//! delivered as-is with an unrecognized-format warning. This channel
//! never hard-rejects a recipient.

use crate::traits::Channel;
use async_trait::async_trait;
use courier_core::RecipientFormat;

/// Telegram delivery channel.
#[derive(Debug, Default)]
pub struct TelegramChannel;

impl TelegramChannel {
    /// Create a new Telegram channel.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "Telegram"
    }

    fn recipient_format(&self) -> RecipientFormat {
        RecipientFormat::Hybrid
    }
}
