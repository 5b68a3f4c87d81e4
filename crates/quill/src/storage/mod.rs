//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `quill_core::storage`. The implementations are selected
//! at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): dependency-free backend for tests and local runs
//! - `dynamodb`: AWS DynamoDB records plus S3 attachments using
//!   `aws-sdk-dynamodb` and `aws-sdk-s3`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with the in-memory backend (default):
//! ```bash
//! cargo build -p quill
//! ```
//!
//! Build with DynamoDB + S3:
//! ```bash
//! cargo build -p quill --no-default-features --features dynamodb
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p quill --features inmemory"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod s3;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbRepository;

#[cfg(feature = "inmemory")]
pub use inmemory::{InMemoryFileStore, InMemoryRepository};

#[cfg(feature = "dynamodb")]
pub use s3::S3FileStore;
