//! Place data structures
//!
//! A place has a handful of well-known columns (`name`, `pic`, `cuisines`,
//! `city`, `state`, `founded`) and keeps any other submitted keys in
//! [`PlaceFields::extra`], which is flattened back into the JSON object on
//! output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::comment::CommentWithAuthor;
use crate::shared::error::SharedError;
use crate::shared::json::{default_if_falsy, strip_keys, JsonObject};

/// Picture used when a place is created without one
pub const DEFAULT_PIC: &str = "http://placekitten.com/400/400";
/// City used when a place is created without one
pub const DEFAULT_CITY: &str = "Anytown";
/// State used when a place is created without one
pub const DEFAULT_STATE: &str = "USA";

/// Keys owned by the server; never taken from a request body
const RESERVED_KEYS: &[&str] = &["placeId", "createdAt", "updatedAt", "comments"];

/// Client-writable part of a place
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceFields {
    pub name: Option<String>,
    pub pic: Option<String>,
    pub cuisines: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Year the place opened
    pub founded: Option<i64>,
    /// Any other submitted keys
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlaceFields {
    /// Build fields from an arbitrary request body.
    ///
    /// Server-owned keys are dropped; unknown keys land in `extra`. A known
    /// key holding the wrong JSON type is a validation error.
    pub fn from_body(mut body: JsonObject) -> Result<Self, SharedError> {
        strip_keys(&mut body, RESERVED_KEYS);
        serde_json::from_value(Value::Object(body))
            .map_err(|e| SharedError::invalid_payload("place", e.to_string()))
    }

    /// Build fields for a new place, substituting the defaults for `pic`,
    /// `city` and `state` when they are absent or falsy.
    pub fn for_new_place(mut body: JsonObject) -> Result<Self, SharedError> {
        default_if_falsy(&mut body, "pic", DEFAULT_PIC);
        default_if_falsy(&mut body, "city", DEFAULT_CITY);
        default_if_falsy(&mut body, "state", DEFAULT_STATE);
        Self::from_body(body)
    }

    /// Shallow merge: submitted keys overwrite, everything else is kept.
    pub fn merged_with(&self, mut body: JsonObject) -> Result<Self, SharedError> {
        let current = serde_json::to_value(self).map_err(|e| {
            SharedError::invalid_payload("place", format!("stored fields could not be re-encoded: {e}"))
        })?;
        let mut current = match current {
            Value::Object(object) => object,
            _ => JsonObject::new(),
        };
        strip_keys(&mut body, RESERVED_KEYS);
        current.extend(body);
        Self::from_body(current)
    }
}

/// A stored place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub place_id: i64,
    #[serde(flatten)]
    pub fields: PlaceFields,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A place hydrated with its comments and their authors
#[derive(Debug, Clone, Serialize)]
pub struct PlaceDetail {
    #[serde(flatten)]
    pub place: Place,
    pub comments: Vec<CommentWithAuthor>,
}
