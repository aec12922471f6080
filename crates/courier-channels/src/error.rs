//! Channel error types.

use courier_core::RecipientError;
use thiserror::Error;

/// Errors that can occur during channel operations.
///
/// The dispatcher reports routine rejections (unknown channel, failed
/// recipient validation) through `DeliveryResult`; these variants exist
/// for callers that want the same conditions as errors, and for
/// transports that can fail.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// No channel registered under the requested name.
    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    /// Recipient failed a channel's hard format rule.
    #[error("Invalid recipient for {channel}: {reason}")]
    InvalidRecipient {
        /// Display name of the rejecting channel.
        channel: String,
        /// The rule that failed.
        reason: RecipientError,
    },

    /// The transport behind a channel refused the message.
    #[error("Delivery failed via {channel}: {message}")]
    Delivery {
        /// Display name of the failing channel.
        channel: String,
        /// Transport error message.
        message: String,
    },
}

impl ChannelError {
    /// Create an unknown-channel error.
    pub fn unknown_channel(name: impl Into<String>) -> Self {
        Self::UnknownChannel(name.into())
    }

    /// Create an invalid-recipient error.
    pub fn invalid_recipient(channel: impl Into<String>, reason: RecipientError) -> Self {
        Self::InvalidRecipient {
            channel: channel.into(),
            reason,
        }
    }

    /// Create a delivery error.
    pub fn delivery(channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Delivery {
            channel: channel.into(),
            message: message.into(),
        }
    }
}
