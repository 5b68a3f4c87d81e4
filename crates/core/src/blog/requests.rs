//! API request types for blog operations.
//!
//! Pure data types and parsing helpers with no I/O. The attachment
//! helpers follow the legacy wire contract: the `file` field is a
//! data-URI-style string whose payload starts after the first comma,
//! and `extension` is a MIME-type-like string such as `image/png`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use super::error::ArticleError;

/// Query parameters for fetching a single article.
#[derive(Debug, Clone, Deserialize)]
pub struct GetArticleQuery {
    pub key: String,
}

/// Request payload for creating an article.
///
/// A non-empty `file` selects attachment mode; `extension` is only
/// consulted in that mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateArticleRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub extension: String,
    #[serde(default)]
    pub file: String,
}

impl CreateArticleRequest {
    /// Returns true when the caller supplied an attachment payload.
    pub fn has_attachment(&self) -> bool {
        !self.file.is_empty()
    }
}

/// Request payload for recording a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTagRequest {
    pub tag: String,
}

/// Extracts the subtype of a MIME-type-like extension string.
///
/// `"image/png"` yields `"png"`. A string without a `/` separator is
/// rejected rather than left to panic on indexing.
pub fn extension_subtype(extension: &str) -> Result<&str, ArticleError> {
    match extension.split_once('/') {
        Some((_, subtype)) if !subtype.is_empty() => Ok(subtype),
        _ => Err(ArticleError::InvalidExtension(extension.to_string())),
    }
}

/// Decodes the base64 payload of a data-URI-style attachment string.
///
/// Everything after the first comma is decoded; when no comma is
/// present the whole string is treated as the payload, which is what
/// existing callers rely on.
pub fn decode_attachment(data: &str) -> Result<Vec<u8>, ArticleError> {
    let payload = match data.split_once(',') {
        Some((_, payload)) => payload,
        None => data,
    };

    BASE64
        .decode(payload)
        .map_err(|e| ArticleError::InvalidAttachment(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_subtype() {
        assert_eq!(extension_subtype("image/png").unwrap(), "png");
        assert_eq!(extension_subtype("image/svg+xml").unwrap(), "svg+xml");
    }

    #[test]
    fn test_extension_without_separator_is_rejected() {
        assert_eq!(
            extension_subtype("png"),
            Err(ArticleError::InvalidExtension("png".to_string()))
        );
        assert!(extension_subtype("image/").is_err());
        assert!(extension_subtype("").is_err());
    }

    #[test]
    fn test_decode_attachment_with_data_uri_prefix() {
        let decoded = decode_attachment("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn test_decode_attachment_without_prefix() {
        // No comma: the whole string is the payload.
        let decoded = decode_attachment("aGVsbG8=").unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn test_decode_attachment_invalid_base64() {
        let err = decode_attachment("data:image/png;base64,!!!").unwrap_err();
        assert!(matches!(err, ArticleError::InvalidAttachment(_)));
    }

    #[test]
    fn test_create_article_request_attachment_mode() {
        let without: CreateArticleRequest =
            serde_json::from_str(r#"{"title":"t","content":"c","extension":"image/png"}"#)
                .unwrap();
        assert!(!without.has_attachment());

        let with: CreateArticleRequest = serde_json::from_str(
            r#"{"title":"t","content":"c","extension":"image/png","file":"data:,aGVsbG8="}"#,
        )
        .unwrap();
        assert!(with.has_attachment());
    }
}
