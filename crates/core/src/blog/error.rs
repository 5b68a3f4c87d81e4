use thiserror::Error;

/// Errors that can occur when validating article creation input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArticleError {
    #[error("Invalid extension (expected 'type/subtype'): {0}")]
    InvalidExtension(String),
    #[error("Invalid attachment encoding: {0}")]
    InvalidAttachment(String),
}
