//! Content record shape and purity guarantees.

use courier_core::{ContentKind, Message};
use courier_integration_tests::{fixed_sent_at, sample_messages};

#[test]
fn test_kind_round_trips_from_construction() {
    let kinds: Vec<ContentKind> = sample_messages()
        .iter()
        .map(|message| message.content().kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            ContentKind::Text,
            ContentKind::Photo,
            ContentKind::Video,
            ContentKind::File
        ]
    );
}

#[test]
fn test_text_record_has_no_media_fields() {
    let record = Message::new_text("plain", fixed_sent_at()).content();
    let value = serde_json::to_value(&record).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 3, "text records carry kind, text, sent_at only");
    assert!(object.contains_key("kind"));
    assert!(object.contains_key("text"));
    assert!(object.contains_key("sent_at"));
}

#[test]
fn test_video_record_serializes_every_field() {
    let message = Message::new_video("clip", fixed_sent_at(), "goal.mp4", "mp4", 42).unwrap();
    let value = serde_json::to_value(message.content()).unwrap();
    assert_eq!(value["kind"], "video");
    assert_eq!(value["file"], "goal.mp4");
    assert_eq!(value["format"], "mp4");
    assert_eq!(value["duration_secs"], 42);
    let sent_at = value["sent_at"].as_str().unwrap();
    assert!(
        sent_at.starts_with("2024-05-17T12:30:00"),
        "sent_at should be RFC 3339, got {sent_at}"
    );
}

#[test]
fn test_photo_record_has_no_duration() {
    let message = Message::new_photo("pic", fixed_sent_at(), "beach.png", "png").unwrap();
    let value = serde_json::to_value(message.content()).unwrap();
    assert_eq!(value["kind"], "photo");
    assert!(value.get("duration_secs").is_none());
}

#[test]
fn test_content_is_pure_and_idempotent() {
    for message in sample_messages() {
        assert_eq!(message.content(), message.content());
    }
}
