//! Delivery outcomes: receipts, results, and rejection reasons.

use super::{ContentKind, RecipientError, ValidationWarning};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Proof of one delivery through a channel's transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    /// Unique id of this delivery.
    pub receipt_id: String,

    /// Display name of the channel that delivered.
    pub channel: String,

    /// Recipient identifier exactly as the caller gave it.
    pub recipient: String,

    /// Kind of content delivered.
    pub kind: ContentKind,

    /// When the transport accepted the message.
    pub delivered_at: DateTime<Utc>,
}

impl DeliveryReceipt {
    /// Mint a receipt stamped now, with a fresh id.
    pub fn new(
        channel: impl Into<String>,
        recipient: impl Into<String>,
        kind: ContentKind,
    ) -> Self {
        Self {
            receipt_id: Uuid::new_v4().to_string(),
            channel: channel.into(),
            recipient: recipient.into(),
            kind,
            delivered_at: Utc::now(),
        }
    }
}

/// Why the dispatcher refused a send before any delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum RejectReason {
    /// No channel is registered under the requested name.
    UnknownChannel { name: String },

    /// The channel's recipient rule failed hard.
    InvalidRecipientFormat {
        channel: String,
        error: RecipientError,
    },
}

/// Outcome of one dispatch attempt.
///
/// Warnings ride on [`DeliveryResult::Delivered`]; they never block
/// delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum DeliveryResult {
    /// The channel transport accepted the message.
    Delivered {
        receipt: DeliveryReceipt,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        warning: Option<ValidationWarning>,
    },

    /// The dispatcher refused the request; no side effects happened.
    Rejected { reason: RejectReason },
}

impl DeliveryResult {
    /// Delivery with no warning attached.
    pub fn delivered(receipt: DeliveryReceipt) -> Self {
        DeliveryResult::Delivered {
            receipt,
            warning: None,
        }
    }

    /// Delivery that proceeded despite a validation warning.
    pub fn delivered_with_warning(receipt: DeliveryReceipt, warning: ValidationWarning) -> Self {
        DeliveryResult::Delivered {
            receipt,
            warning: Some(warning),
        }
    }

    /// Rejection before any delivery attempt.
    pub fn rejected(reason: RejectReason) -> Self {
        DeliveryResult::Rejected { reason }
    }

    /// True when the message reached the transport.
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryResult::Delivered { .. })
    }

    /// Warning surfaced by validation, when delivery proceeded with one.
    pub fn warning(&self) -> Option<ValidationWarning> {
        match self {
            DeliveryResult::Delivered { warning, .. } => *warning,
            DeliveryResult::Rejected { .. } => None,
        }
    }

    /// Receipt of a successful delivery.
    pub fn receipt(&self) -> Option<&DeliveryReceipt> {
        match self {
            DeliveryResult::Delivered { receipt, .. } => Some(receipt),
            DeliveryResult::Rejected { .. } => None,
        }
    }

    /// Rejection reason, when the dispatch was refused.
    pub fn reject_reason(&self) -> Option<&RejectReason> {
        match self {
            DeliveryResult::Delivered { .. } => None,
            DeliveryResult::Rejected { reason } => Some(reason),
        }
    }
}
