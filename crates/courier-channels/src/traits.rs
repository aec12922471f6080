//! Core channel trait.

use crate::Result;
use async_trait::async_trait;
use courier_core::{ContentRecord, DeliveryReceipt, RecipientFormat, ValidationOutcome};
use std::fmt::Debug;
use tracing::info;

/// A named delivery provider.
///
/// Implementations declare a display name and a [`RecipientFormat`];
/// the format drives `validate`, and the provided `deliver` simulates a
/// transport by emitting a structured log line and minting a receipt.
/// `deliver` is the only side-effecting operation on a channel, so a
/// real transport can replace it without touching validation.
#[async_trait]
pub trait Channel: Send + Sync + Debug {
    /// Get the channel's display name, e.g. "WhatsApp". The registry
    /// keys channels by the lower-cased form.
    fn name(&self) -> &str;

    /// Get the recipient format this channel expects.
    fn recipient_format(&self) -> RecipientFormat;

    /// Check a recipient identifier against this channel's format rule.
    fn validate(&self, recipient: &str) -> ValidationOutcome {
        self.recipient_format().validate(recipient)
    }

    /// Hand the rendered content to the transport.
    ///
    /// Called only after [`Channel::validate`] returned a non-invalid
    /// outcome. The default transport logs the delivery and never
    /// fails; the `Result` is the seam for transports that can.
    async fn deliver(&self, content: &ContentRecord, recipient: &str) -> Result<DeliveryReceipt> {
        let receipt = DeliveryReceipt::new(self.name(), recipient, content.kind);
        info!(
            "Delivered {} message via {} to {} (receipt {})",
            content.kind,
            self.name(),
            recipient,
            receipt.receipt_id
        );
        Ok(receipt)
    }
}
