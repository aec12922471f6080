//! Shared fixtures for the integration suite.

use chrono::{DateTime, TimeZone, Utc};
use courier_channels::Dispatcher;
use courier_core::Message;

/// Dispatcher wired with the built-in providers.
pub fn dispatcher() -> Dispatcher {
    Dispatcher::with_default_channels()
}

/// Fixed timestamp so content records are comparable across calls.
pub fn fixed_sent_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 0).unwrap()
}

/// One message of every kind, for property sweeps.
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message::new_text("plain text", fixed_sent_at()),
        Message::new_photo("holiday photo", fixed_sent_at(), "beach.png", "png")
            .expect("photo fixture"),
        Message::new_video("match highlights", fixed_sent_at(), "goal.mp4", "mp4", 42)
            .expect("video fixture"),
        Message::new_file("quarterly report", fixed_sent_at(), "report.pdf", "pdf")
            .expect("file fixture"),
    ]
}
