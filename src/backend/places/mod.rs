//! Places
//!
//! CRUD over place rows. Places own their comments; deleting a place deletes
//! them too.

/// Database operations
pub mod db;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_place, delete_place, get_place, list_places, update_place};
