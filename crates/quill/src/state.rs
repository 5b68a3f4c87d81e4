//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It uses repository trait objects for storage abstraction
//! and supports different backends via feature flags.

use std::sync::Arc;

use quill_core::storage::{ArticleRepository, FileStore, TagRepository};

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// This is cloned for each request handler. It holds only immutable
/// shared resources: the store clients live inside the repositories and
/// are built once at startup, then reused across requests.
#[derive(Clone)]
pub struct AppState {
    /// Article repository.
    pub article_repo: Arc<dyn ArticleRepository>,
    /// Tag repository.
    pub tag_repo: Arc<dyn TagRepository>,
    /// Blob store for article attachments.
    pub file_store: Arc<dyn FileStore>,
    /// Listing scan cap.
    pub scan_limit: i32,
}

impl AppState {
    /// Creates a new AppState with the given repositories and configuration.
    pub fn build(
        article_repo: Arc<dyn ArticleRepository>,
        tag_repo: Arc<dyn TagRepository>,
        file_store: Arc<dyn FileStore>,
        config: &Config,
    ) -> Self {
        Self {
            article_repo,
            tag_repo,
            file_store,
            scan_limit: config.scan_limit,
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::{InMemoryFileStore, InMemoryRepository};

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for testing and local runs without any external dependencies.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = Arc::new(InMemoryRepository::new());
            let file_store = Arc::new(InMemoryFileStore::new());

            Ok(Self::build(repo.clone(), repo, file_store, config))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::{DynamoDbRepository, S3FileStore};

    impl AppState {
        /// Creates AppState with DynamoDB storage and S3 attachments.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);
            let s3_client = aws_sdk_s3::Client::new(&aws_config);

            let repo = Arc::new(DynamoDbRepository::new(
                dynamodb_client,
                config.articles_table.clone(),
                config.tags_table.clone(),
            ));
            let file_store = Arc::new(S3FileStore::new(s3_client, config.media_bucket.clone()));

            Ok(Self::build(repo.clone(), repo, file_store, config))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================

#[cfg(all(test, feature = "inmemory"))]
impl Default for AppState {
    /// Creates an AppState with in-memory storage for testing.
    fn default() -> Self {
        use crate::storage::{InMemoryFileStore, InMemoryRepository};

        let repo = Arc::new(InMemoryRepository::new());
        let file_store = Arc::new(InMemoryFileStore::new());

        Self::build(repo.clone(), repo, file_store, &Config::default())
    }
}
