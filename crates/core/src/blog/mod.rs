mod error;
mod requests;
mod types;

pub use error::ArticleError;
pub use requests::{
    decode_attachment, extension_subtype, CreateArticleRequest, CreateTagRequest, GetArticleQuery,
};
pub use types::{registered_time_at, registered_time_now, Article, Tag, REGISTERED_TIME_FORMAT};
