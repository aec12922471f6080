//! Core types for Courier: the message model, recipient-format rules,
//! and delivery outcomes.
//!
//! This crate is pure data and pure logic. Channel behavior, including
//! the built-in providers and the dispatcher, lives in
//! `courier-channels`.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    ContentKind, ContentRecord, DeliveryReceipt, DeliveryResult, MediaInfo, Message, MessageKind,
    RecipientError, RecipientFormat, RecipientKind, RejectReason, ValidationOutcome,
    ValidationWarning,
};
