//! REST-Rant - Main Library
//!
//! Backend for a small "places and comments" review application: users log
//! in, manage places, and leave rants or raves on them.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types (places, comments, public users) and JSON
//!   helpers. Plain serde, usable by API clients.
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and routes
//!   - Session or token authentication
//!   - SQLite persistence through sqlx
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use rest_rant::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Wire types shared with API clients
pub mod shared;

/// Server-side code (only compiled with `ssr` feature)
#[cfg(feature = "ssr")]
pub mod backend;
