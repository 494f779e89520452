//! Public user representation
//!
//! The only shape in which a user ever leaves the server. It deliberately has
//! no password digest field.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User information that is safe to return to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
