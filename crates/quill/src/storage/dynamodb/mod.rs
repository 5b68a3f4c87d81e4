//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository
//! traits using `aws-sdk-dynamodb`. Articles and tags live in separate
//! tables addressed by plain puts and point gets; no secondary indexes,
//! conditional writes, or transactions are used.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
