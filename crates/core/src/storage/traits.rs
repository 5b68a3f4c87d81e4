use async_trait::async_trait;

use crate::blog::{Article, Tag};

use super::Result;

/// Repository for article operations.
///
/// Articles are create-and-read only: there is no update or delete.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Gets an article by its storage key.
    async fn get_article(&self, storage_key: &str) -> Result<Option<Article>>;

    /// Lists up to `limit` articles in store-native scan order.
    ///
    /// No sort order or stable pagination is guaranteed.
    async fn list_articles(&self, limit: i32) -> Result<Vec<Article>>;

    /// Creates a new article record.
    async fn create_article(&self, article: &Article) -> Result<()>;
}

/// Repository for the append-only tag log.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Records a new tag.
    async fn create_tag(&self, tag: &Tag) -> Result<()>;

    /// Lists up to `limit` tags in store-native scan order.
    async fn list_tags(&self, limit: i32) -> Result<Vec<Tag>>;
}

/// Key-addressed blob storage for article attachments.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Uploads a publicly readable blob under the given key.
    async fn put_file(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()>;
}
