//! S3 blob store for article attachments.
//!
//! A single `put_object` per upload with an explicit key, content type
//! and a public-read ACL. No versioning or multipart handling beyond
//! what the SDK does internally.

use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;

use quill_core::storage::{FileStore, RepositoryError, Result};

/// S3-backed implementation of [`FileStore`].
pub struct S3FileStore {
    client: Client,
    bucket: String,
}

impl S3FileStore {
    /// Creates a new file store with the given client and bucket name.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl FileStore for S3FileStore {
    async fn put_file(&self, key: &str, bytes: Vec<u8>, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|err| {
                RepositoryError::QueryFailed(format!(
                    "PutObject failed: {:?}",
                    err.into_service_error()
                ))
            })?;

        Ok(())
    }
}
