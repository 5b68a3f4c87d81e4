pub mod articles;
pub mod error;
pub mod health;
pub mod tags;

pub use error::ApiError;
