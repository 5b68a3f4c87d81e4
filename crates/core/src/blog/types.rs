use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Format of the `registered_time` field stored alongside every record.
///
/// This is a legacy wire format (slash-separated date, `T` separator,
/// no zone designator) that existing readers depend on.
pub const REGISTERED_TIME_FORMAT: &str = "%Y/%m/%dT%H:%M:%S";

/// Registration timestamps are rendered in a fixed UTC+9 offset.
const REGISTERED_TIME_OFFSET_SECONDS: i32 = 9 * 60 * 60;

/// Renders the given instant in the `registered_time` wire format.
pub fn registered_time_at(instant: DateTime<Utc>) -> String {
    let offset = FixedOffset::east_opt(REGISTERED_TIME_OFFSET_SECONDS)
        .expect("fixed offset is within range");
    instant
        .with_timezone(&offset)
        .format(REGISTERED_TIME_FORMAT)
        .to_string()
}

/// Renders the current time in the `registered_time` wire format.
pub fn registered_time_now() -> String {
    registered_time_at(Utc::now())
}

/// A blog article.
///
/// The `storage_key` is assigned exactly once at creation and is
/// immutable afterwards; articles are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Primary key: a bare UUID, or `{uuid}.{subtype}` when the article
    /// carries an attachment.
    pub storage_key: String,
    /// The bare generated UUID when an attachment exists, empty otherwise.
    #[serde(default)]
    pub filename: String,
    pub title: String,
    pub content: String,
    pub registered_time: String,
}

impl Article {
    /// Creates a text-only article with a fresh UUID storage key.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            storage_key: Uuid::new_v4().to_string(),
            filename: String::new(),
            title: title.into(),
            content: content.into(),
            registered_time: registered_time_now(),
        }
    }

    /// Creates an article that carries an attachment.
    ///
    /// The storage key becomes `{uuid}.{subtype}` and the same key
    /// addresses the attachment blob in the object store.
    pub fn with_attachment(
        title: impl Into<String>,
        content: impl Into<String>,
        subtype: &str,
    ) -> Self {
        let id = Uuid::new_v4();
        Self {
            storage_key: format!("{id}.{subtype}"),
            filename: id.to_string(),
            title: title.into(),
            content: content.into(),
            registered_time: registered_time_now(),
        }
    }

    /// Returns true if this article was created with an attachment.
    pub fn has_attachment(&self) -> bool {
        !self.filename.is_empty()
    }
}

/// A tag label.
///
/// Tags are an append-only log with no linkage to articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tag: String,
    pub registered_time: String,
}

impl Tag {
    /// Creates a new tag with the current registration time.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            tag: label.into(),
            registered_time: registered_time_now(),
        }
    }
}
