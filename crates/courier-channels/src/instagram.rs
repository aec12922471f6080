//! Instagram channel implementation.
//!
//! Same recipient convention as Facebook: `@` usernames expected,
//! mismatches warn without blocking delivery.

use crate::traits::Channel;
use async_trait::async_trait;
use courier_core::RecipientFormat;

/// Instagram delivery channel.
#[derive(Debug, Default)]
pub struct InstagramChannel;

impl InstagramChannel {
    /// Create a new Instagram channel.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Channel for InstagramChannel {
    fn name(&self) -> &str {
        "Instagram"
    }

    fn recipient_format(&self) -> RecipientFormat {
        RecipientFormat::Username
    }
}
