//! In-memory storage backend.
//!
//! Implements the repository traits over plain HashMaps. Used by tests
//! and for running the service without any external dependencies.

mod repository;

pub use repository::{InMemoryFileStore, InMemoryRepository, StoredFile};
