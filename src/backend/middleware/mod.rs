//! Middleware
//!
//! - **`auth`** - resolves credentials to the [`auth::CurrentUser`] of each request

pub mod auth;

pub use auth::{resolve_current_user, CurrentUser};
