//! Comments on places

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_comment, delete_comment};
