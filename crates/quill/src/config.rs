use std::env;

/// Application configuration loaded from environment variables.
///
/// Store credentials and region are not held here: the AWS SDK default
/// provider chain resolves them (including the access key / secret key
/// environment variables) when the `dynamodb` backend is built.
#[derive(Debug, Clone)]
pub struct Config {
    /// Key-value store table holding article records (default: "my-blog-t")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub articles_table: String,
    /// Key-value store table holding the tag log (default: "my-blog-tag-t")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub tags_table: String,
    /// Object store bucket for article attachments (default: "my-blog-storage")
    /// Note: Only used when the `dynamodb` feature is enabled.
    #[allow(dead_code)]
    pub media_bucket: String,
    /// Maximum number of records returned by a listing scan (default: 50)
    pub scan_limit: i32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARTICLES_TABLE` - Articles table name (default: "my-blog-t")
    /// - `TAGS_TABLE` - Tags table name (default: "my-blog-tag-t")
    /// - `MEDIA_BUCKET` - Attachment bucket name (default: "my-blog-storage")
    /// - `SCAN_LIMIT` - Listing scan cap (default: 50)
    pub fn from_env() -> Self {
        Self {
            articles_table: env::var("ARTICLES_TABLE").unwrap_or_else(|_| "my-blog-t".to_string()),
            tags_table: env::var("TAGS_TABLE").unwrap_or_else(|_| "my-blog-tag-t".to_string()),
            media_bucket: env::var("MEDIA_BUCKET")
                .unwrap_or_else(|_| "my-blog-storage".to_string()),
            scan_limit: env::var("SCAN_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(50),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
