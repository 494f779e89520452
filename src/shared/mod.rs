//! Shared Module
//!
//! This module contains the model types exchanged over the HTTP API. They are
//! plain serde types with no server dependencies, so API clients can reuse
//! them without enabling the `ssr` feature.
//!
//! # Overview
//!
//! - **`place`** - Places and their client-writable fields
//! - **`comment`** - Comments on places
//! - **`user`** - Public user view (never includes the password digest)
//! - **`json`** - Truthiness and key-stripping helpers for loose JSON bodies
//! - **`error`** - Payload validation errors

/// Place data structures
pub mod place;

/// Comment data structures
pub mod comment;

/// Public user representation
pub mod user;

/// JSON payload helpers
pub mod json;

/// Shared error types
pub mod error;

pub use comment::{Comment, CommentFields, CommentWithAuthor};
pub use error::SharedError;
pub use place::{Place, PlaceDetail, PlaceFields};
pub use user::PublicUser;
