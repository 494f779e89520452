//! Backend Module
//!
//! All server-side code. Only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Route table, fallback and middleware stack
//! - **`auth`** - Users, credential checks, session/token strategies, login handlers
//! - **`middleware`** - Current-user resolution
//! - **`places`** - Place storage and handlers
//! - **`comments`** - Comment storage and handlers
//! - **`extract`** - Request body and path id extraction
//! - **`error`** - `BackendError` and its JSON responses
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── places/         - Places
//! ├── comments/       - Comments
//! ├── extract.rs      - Extractors
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! HTTP request → trace → session → current-user resolution → handler →
//! sqlx → JSON response. Any `BackendError` becomes a `{ "message": ... }`
//! body with the matching status code.

/// Server initialization and state management
pub mod server;

/// HTTP route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Request processing middleware
pub mod middleware;

/// Places
pub mod places;

/// Comments on places
pub mod comments;

/// Request extractors
pub mod extract;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
