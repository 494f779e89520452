//! Comment data structures
//!
//! Comments hang off a place. `authorId` and `placeId` are always assigned by
//! the server, and `rant` is coerced to a boolean before it reaches this
//! layer, so none of them are part of [`CommentFields`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::error::SharedError;
use crate::shared::json::{strip_keys, JsonObject};
use crate::shared::user::PublicUser;

const RESERVED_KEYS: &[&str] = &[
    "commentId",
    "placeId",
    "authorId",
    "author",
    "rant",
    "createdAt",
    "updatedAt",
];

/// Client-writable part of a comment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentFields {
    pub content: Option<String>,
    pub stars: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CommentFields {
    /// Build fields from a request body, dropping server-owned keys
    pub fn from_body(mut body: JsonObject) -> Result<Self, SharedError> {
        strip_keys(&mut body, RESERVED_KEYS);
        serde_json::from_value(Value::Object(body))
            .map_err(|e| SharedError::invalid_payload("comment", e.to_string()))
    }
}

/// A stored comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub comment_id: i64,
    pub place_id: i64,
    pub author_id: i64,
    pub rant: bool,
    #[serde(flatten)]
    pub fields: CommentFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A comment together with its author.
///
/// `author` is `None` only when the author row no longer exists.
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: Option<PublicUser>,
}
