//! Message model: immutable payloads and their rendered content records.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag identifying a message variant.
///
/// This is the `kind` value written into every [`ContentRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Photo,
    Video,
    File,
}

impl ContentKind {
    /// Wire and log name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Photo => "photo",
            ContentKind::Video => "video",
            ContentKind::File => "file",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attachment descriptor carried by the media message kinds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Path or URI of the media payload.
    pub file: String,

    /// Format hint: file extension or MIME subtype.
    pub format: String,
}

impl MediaInfo {
    /// Create a descriptor. Fails if `file` is empty or whitespace-only.
    pub fn new(file: impl Into<String>, format: impl Into<String>) -> Result<Self> {
        let file = file.into();
        if file.trim().is_empty() {
            return Err(Error::invalid_argument(
                "media file reference must not be empty",
            ));
        }
        Ok(Self {
            file,
            format: format.into(),
        })
    }

    /// Create a descriptor, deriving the format hint from the file
    /// extension. Unknown extensions leave the hint empty.
    pub fn inferred(file: impl Into<String>) -> Result<Self> {
        let file = file.into();
        let format = mime_guess::from_path(&file)
            .first()
            .map(|mime| mime.subtype().as_str().to_string())
            .unwrap_or_default();
        Self::new(file, format)
    }
}

/// Kind-specific message payload.
///
/// The kind is fixed at construction and decides which fields the
/// rendered [`ContentRecord`] carries; [`MessageKind::Text`] carries no
/// media fields at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// Plain text, no attachment.
    Text,

    /// Image attachment.
    Photo { media: MediaInfo },

    /// Video attachment plus its playback length in seconds.
    Video { media: MediaInfo, duration_secs: u32 },

    /// Generic document attachment.
    File { media: MediaInfo },
}

impl MessageKind {
    /// The tag written into content records for this payload.
    pub fn content_kind(&self) -> ContentKind {
        match self {
            MessageKind::Text => ContentKind::Text,
            MessageKind::Photo { .. } => ContentKind::Photo,
            MessageKind::Video { .. } => ContentKind::Video,
            MessageKind::File { .. } => ContentKind::File,
        }
    }

    /// Attachment descriptor, if this kind carries one.
    pub fn media(&self) -> Option<&MediaInfo> {
        match self {
            MessageKind::Text => None,
            MessageKind::Photo { media } | MessageKind::File { media } => Some(media),
            MessageKind::Video { media, .. } => Some(media),
        }
    }
}

/// An outbound message: an immutable value created once by the caller.
///
/// There are no setters; construction validates the invariants and the
/// message is shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Message {
    text: String,
    sent_at: DateTime<Utc>,
    kind: MessageKind,
}

impl Message {
    /// Plain text message.
    pub fn new_text(text: impl Into<String>, sent_at: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            sent_at,
            kind: MessageKind::Text,
        }
    }

    /// Photo message. Fails if `file` is empty.
    pub fn new_photo(
        text: impl Into<String>,
        sent_at: DateTime<Utc>,
        file: impl Into<String>,
        format: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            text: text.into(),
            sent_at,
            kind: MessageKind::Photo {
                media: MediaInfo::new(file, format)?,
            },
        })
    }

    /// Video message with its playback length. Fails if `file` is empty.
    pub fn new_video(
        text: impl Into<String>,
        sent_at: DateTime<Utc>,
        file: impl Into<String>,
        format: impl Into<String>,
        duration_secs: u32,
    ) -> Result<Self> {
        Ok(Self {
            text: text.into(),
            sent_at,
            kind: MessageKind::Video {
                media: MediaInfo::new(file, format)?,
                duration_secs,
            },
        })
    }

    /// File (document) message. Fails if `file` is empty.
    pub fn new_file(
        text: impl Into<String>,
        sent_at: DateTime<Utc>,
        file: impl Into<String>,
        format: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            text: text.into(),
            sent_at,
            kind: MessageKind::File {
                media: MediaInfo::new(file, format)?,
            },
        })
    }

    /// Message body text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Timestamp stamped by the caller at construction.
    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    /// Kind-specific payload.
    pub fn kind(&self) -> &MessageKind {
        &self.kind
    }

    /// Tag of this message's kind.
    pub fn content_kind(&self) -> ContentKind {
        self.kind.content_kind()
    }

    /// Render the flat content record used for delivery and assertions.
    ///
    /// Pure: repeated calls on the same message return equal records.
    pub fn content(&self) -> ContentRecord {
        let mut record = ContentRecord {
            kind: self.kind.content_kind(),
            text: self.text.clone(),
            sent_at: self.sent_at,
            file: None,
            format: None,
            duration_secs: None,
        };
        match &self.kind {
            MessageKind::Text => {}
            MessageKind::Photo { media } | MessageKind::File { media } => {
                record.file = Some(media.file.clone());
                record.format = Some(media.format.clone());
            }
            MessageKind::Video {
                media,
                duration_secs,
            } => {
                record.file = Some(media.file.clone());
                record.format = Some(media.format.clone());
                record.duration_secs = Some(*duration_secs);
            }
        }
        record
    }
}

/// Flat, serializable rendering of one message.
///
/// Media fields are present only for media kinds, and `duration_secs`
/// only for video. `sent_at` serializes as RFC 3339.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Kind tag of the rendered message.
    pub kind: ContentKind,

    /// Message body text.
    pub text: String,

    /// Caller-supplied send timestamp.
    pub sent_at: DateTime<Utc>,

    /// Media path or URI (media kinds only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Media format hint (media kinds only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Playback length in seconds (video only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<u32>,
}
