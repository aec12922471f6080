//! Recipient-format rules shared by delivery channels.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Validation capability a channel declares for its recipients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientFormat {
    /// Digits only, at least one. No `+` prefix, no separators.
    PhoneNumber,

    /// Must start with `@`.
    Username,

    /// Accepts phone numbers or usernames, with best-effort detection.
    Hybrid,
}

impl RecipientFormat {
    /// Apply this format's rule to a recipient identifier.
    ///
    /// Only [`RecipientFormat::PhoneNumber`] can fail hard; the other
    /// formats degrade to a warning and let delivery proceed.
    pub fn validate(&self, recipient: &str) -> ValidationOutcome {
        match self {
            RecipientFormat::PhoneNumber => {
                if is_phone_number(recipient) {
                    ValidationOutcome::Valid {
                        kind: RecipientKind::Phone,
                    }
                } else {
                    ValidationOutcome::Invalid {
                        reason: RecipientError::NotAPhoneNumber,
                    }
                }
            }
            RecipientFormat::Username => {
                if is_username(recipient) {
                    ValidationOutcome::Valid {
                        kind: RecipientKind::Username,
                    }
                } else {
                    ValidationOutcome::ValidWithWarning {
                        kind: RecipientKind::Other,
                        warning: ValidationWarning::MissingUsernamePrefix,
                    }
                }
            }
            RecipientFormat::Hybrid => {
                if is_phone_number(recipient) {
                    ValidationOutcome::Valid {
                        kind: RecipientKind::Phone,
                    }
                } else if is_username(recipient) {
                    ValidationOutcome::Valid {
                        kind: RecipientKind::Username,
                    }
                } else {
                    ValidationOutcome::ValidWithWarning {
                        kind: RecipientKind::Other,
                        warning: ValidationWarning::UnrecognizedFormat,
                    }
                }
            }
        }
    }
}

/// True when `recipient` is non-empty and every character is an ASCII digit.
fn is_phone_number(recipient: &str) -> bool {
    !recipient.is_empty() && recipient.chars().all(|ch| ch.is_ascii_digit())
}

/// True when `recipient` carries the `@` username prefix.
fn is_username(recipient: &str) -> bool {
    recipient.starts_with('@')
}

/// Best-effort classification of a recipient identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientKind {
    Phone,
    Username,
    /// Neither a phone number nor an `@` username.
    Other,
}

impl RecipientKind {
    /// Log name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientKind::Phone => "phone",
            RecipientKind::Username => "username",
            RecipientKind::Other => "other",
        }
    }
}

impl fmt::Display for RecipientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-blocking deviation from a channel's recipient convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationWarning {
    /// The channel convention is an `@`-prefixed username.
    MissingUsernamePrefix,

    /// A hybrid channel could not classify the recipient.
    UnrecognizedFormat,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::MissingUsernamePrefix => {
                f.write_str("recipient does not use the expected @username form")
            }
            ValidationWarning::UnrecognizedFormat => {
                f.write_str("recipient is neither a phone number nor an @username")
            }
        }
    }
}

/// Hard recipient-format failure: delivery must not be attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientError {
    #[error("recipient is not a phone number")]
    NotAPhoneNumber,
}

/// Result of checking a recipient against a channel's format rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum ValidationOutcome {
    /// Recipient matches the expected format.
    Valid { kind: RecipientKind },

    /// Recipient deviates from convention; delivery still proceeds.
    ValidWithWarning {
        kind: RecipientKind,
        warning: ValidationWarning,
    },

    /// Recipient violates a hard rule; delivery is refused.
    Invalid { reason: RecipientError },
}

impl ValidationOutcome {
    /// True when delivery must not be attempted.
    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationOutcome::Invalid { .. })
    }

    /// The warning attached to this outcome, if any.
    pub fn warning(&self) -> Option<ValidationWarning> {
        match self {
            ValidationOutcome::ValidWithWarning { warning, .. } => Some(*warning),
            _ => None,
        }
    }

    /// Detected recipient kind, for outcomes that permit delivery.
    pub fn recipient_kind(&self) -> Option<RecipientKind> {
        match self {
            ValidationOutcome::Valid { kind }
            | ValidationOutcome::ValidWithWarning { kind, .. } => Some(*kind),
            ValidationOutcome::Invalid { .. } => None,
        }
    }
}
