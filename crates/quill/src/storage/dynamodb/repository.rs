//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `quill_core::storage` using
//! DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use quill_core::blog::{Article, Tag};
use quill_core::storage::{ArticleRepository, Result, TagRepository};

use super::conversions::{article_to_item, item_to_article, item_to_tag, tag_to_item};
use super::error::{map_get_item_error, map_put_item_error, map_scan_error};

/// DynamoDB-based repository implementation.
///
/// Articles and tags live in separate tables. The client is built once
/// at startup and shared across requests.
pub struct DynamoDbRepository {
    client: Client,
    articles_table: String,
    tags_table: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given client and table names.
    pub fn new(
        client: Client,
        articles_table: impl Into<String>,
        tags_table: impl Into<String>,
    ) -> Self {
        Self {
            client,
            articles_table: articles_table.into(),
            tags_table: tags_table.into(),
        }
    }
}

#[async_trait]
impl ArticleRepository for DynamoDbRepository {
    async fn get_article(&self, storage_key: &str) -> Result<Option<Article>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.articles_table)
            .key("storage_key", AttributeValue::S(storage_key.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_article(&item)?)),
            None => Ok(None),
        }
    }

    async fn list_articles(&self, limit: i32) -> Result<Vec<Article>> {
        let result = self
            .client
            .scan()
            .table_name(&self.articles_table)
            .limit(limit)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_article).collect()
    }

    async fn create_article(&self, article: &Article) -> Result<()> {
        // Plain put: keys are freshly minted UUIDs, so no condition
        // expression guards against overwrite.
        self.client
            .put_item()
            .table_name(&self.articles_table)
            .set_item(Some(article_to_item(article)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }
}

#[async_trait]
impl TagRepository for DynamoDbRepository {
    async fn create_tag(&self, tag: &Tag) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.tags_table)
            .set_item(Some(tag_to_item(tag)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn list_tags(&self, limit: i32) -> Result<Vec<Tag>> {
        let result = self
            .client
            .scan()
            .table_name(&self.tags_table)
            .limit(limit)
            .send()
            .await
            .map_err(map_scan_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_tag).collect()
    }
}
