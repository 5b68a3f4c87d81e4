use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use quill_core::blog::{Article, Tag};
use quill_core::storage::{ArticleRepository, FileStore, Result, TagRepository};

/// In-memory repository for articles and tags.
///
/// Listing iterates the map in its native (unspecified) order, matching
/// the no-sort-guarantee contract of the scan-backed production backend.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    articles: RwLock<HashMap<String, Article>>,
    tags: RwLock<Vec<Tag>>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryRepository {
    async fn get_article(&self, storage_key: &str) -> Result<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.get(storage_key).cloned())
    }

    async fn list_articles(&self, limit: i32) -> Result<Vec<Article>> {
        let articles = self.articles.read().await;
        Ok(articles
            .values()
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn create_article(&self, article: &Article) -> Result<()> {
        let mut articles = self.articles.write().await;
        articles.insert(article.storage_key.clone(), article.clone());
        Ok(())
    }
}

#[async_trait]
impl TagRepository for InMemoryRepository {
    async fn create_tag(&self, tag: &Tag) -> Result<()> {
        let mut tags = self.tags.write().await;
        tags.push(tag.clone());
        Ok(())
    }

    async fn list_tags(&self, limit: i32) -> Result<Vec<Tag>> {
        let tags = self.tags.read().await;
        Ok(tags.iter().take(limit.max(0) as usize).cloned().collect())
    }
}

/// A blob held by the in-memory file store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// In-memory blob store for article attachments.
#[derive(Debug, Default)]
pub struct InMemoryFileStore {
    files: RwLock<HashMap<String, StoredFile>>,
}

impl InMemoryFileStore {
    /// Creates an empty file store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the blob stored under the given key, if any.
    ///
    /// Test accessor: handlers only ever write through [`FileStore`].
    #[allow(dead_code)]
    pub async fn get_file(&self, key: &str) -> Option<StoredFile> {
        let files = self.files.read().await;
        files.get(key).cloned()
    }

    /// Number of stored blobs.
    ///
    /// Test accessor: handlers only ever write through [`FileStore`].
    #[allow(dead_code)]
    pub async fn file_count(&self) -> usize {
        let files = self.files.read().await;
        files.len()
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn put_file(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        let mut files = self.files.write().await;
        files.insert(
            key.to_string(),
            StoredFile {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }
}
