//! Core types for Courier.

mod delivery;
mod message;
mod recipient;

pub use delivery::*;
pub use message::*;
pub use recipient::*;
