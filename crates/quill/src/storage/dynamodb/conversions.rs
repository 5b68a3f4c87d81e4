//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! domain types. These are testable in isolation without DynamoDB access.
//!
//! Attribute names are the legacy wire names existing tables use:
//! `storage_key`, `filename`, `title`, `content`, `registered_time` for
//! articles and `tag`, `registered_time` for tags.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use quill_core::blog::{Article, Tag};
use quill_core::storage::RepositoryError;

// ============================================================================
// Article conversions
// ============================================================================

/// Convert an Article to a DynamoDB item.
pub fn article_to_item(article: &Article) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "storage_key".to_string(),
        AttributeValue::S(article.storage_key.clone()),
    );
    // Text-only articles carry no filename attribute at all.
    if !article.filename.is_empty() {
        item.insert(
            "filename".to_string(),
            AttributeValue::S(article.filename.clone()),
        );
    }
    item.insert("title".to_string(), AttributeValue::S(article.title.clone()));
    item.insert(
        "content".to_string(),
        AttributeValue::S(article.content.clone()),
    );
    item.insert(
        "registered_time".to_string(),
        AttributeValue::S(article.registered_time.clone()),
    );

    item
}

/// Convert a DynamoDB item to an Article.
pub fn item_to_article(
    item: &HashMap<String, AttributeValue>,
) -> Result<Article, RepositoryError> {
    Ok(Article {
        storage_key: get_string(item, "storage_key")?,
        filename: get_optional_string(item, "filename").unwrap_or_default(),
        title: get_string(item, "title")?,
        content: get_string(item, "content")?,
        registered_time: get_string(item, "registered_time")?,
    })
}

// ============================================================================
// Tag conversions
// ============================================================================

/// Convert a Tag to a DynamoDB item.
pub fn tag_to_item(tag: &Tag) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert("tag".to_string(), AttributeValue::S(tag.tag.clone()));
    item.insert(
        "registered_time".to_string(),
        AttributeValue::S(tag.registered_time.clone()),
    );

    item
}

/// Convert a DynamoDB item to a Tag.
pub fn item_to_tag(item: &HashMap<String, AttributeValue>) -> Result<Tag, RepositoryError> {
    Ok(Tag {
        tag: get_string(item, "tag")?,
        registered_time: get_string(item, "registered_time")?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Get a required string attribute.
fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get an optional string attribute.
fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
}
