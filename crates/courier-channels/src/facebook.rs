//! Facebook channel implementation.
//!
//! Recipients are conventionally `@` usernames. A recipient without the
//! prefix only raises a warning; the message is still delivered exactly
//! as addressed.

use crate::traits::Channel;
use async_trait::async_trait;
use courier_core::RecipientFormat;

/// Facebook delivery channel.
#[derive(Debug, Default)]
pub struct FacebookChannel;

impl FacebookChannel {
    /// Create a new Facebook channel.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Channel for FacebookChannel {
    fn name(&self) -> &str {
        "Facebook"
    }

    fn recipient_format(&self) -> RecipientFormat {
        RecipientFormat::Username
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::ValidationWarning;

    #[test]
    fn test_accepts_prefixed_usernames() {
        let outcome = FacebookChannel::new().validate("@maria");
        assert!(!outcome.is_invalid());
        assert!(outcome.warning().is_none());
    }

    #[test]
    fn test_warns_but_never_rejects_bare_names() {
        let outcome = FacebookChannel::new().validate("maria");
        assert!(!outcome.is_invalid());
        assert_eq!(outcome.warning(), Some(ValidationWarning::MissingUsernamePrefix));
    }
}
