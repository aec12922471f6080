//! Delivery channels and dispatch for Courier.
//!
//! This crate provides the channel trait and built-in providers, along
//! with the registry and dispatcher that route outbound messages.

pub mod error;
pub mod traits;
pub mod registry;
pub mod dispatch;
pub mod whatsapp;
pub mod telegram;
pub mod facebook;
pub mod instagram;

pub use error::ChannelError;
pub use traits::Channel;
pub use registry::ChannelRegistry;
pub use dispatch::{Dispatcher, DispatcherBuilder};
pub use whatsapp::WhatsAppChannel;
pub use telegram::TelegramChannel;
pub use facebook::FacebookChannel;
pub use instagram::InstagramChannel;

/// Result type for channel operations.
pub type Result<T> = std::result::Result<T, ChannelError>;
