//! Authentication Module
//!
//! This module verifies credentials, establishes the authenticated context
//! after a successful login and serves the `/authentication` endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── credentials.rs  - Email/password verification
//! ├── tokens.rs       - JWT creation and validation
//! ├── strategy.rs     - Session vs. token strategy
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Login**: email and password → credentials verified → session updated
//!    or token issued, depending on `AUTH_STRATEGY`
//! 2. **Every request**: the current-user middleware resolves the session or
//!    bearer token back to a user
//! 3. **Logout**: session flushed (session strategy only)
//!
//! # Security
//!
//! - Passwords are stored as bcrypt digests and never logged
//! - The digest never leaves the server; responses carry `PublicUser`
//! - The session id is cycled on login

/// User data model and database operations
pub mod users;

/// Credential verification
pub mod credentials;

/// JWT token generation and validation
pub mod tokens;

/// Authentication strategies
pub mod strategy;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, logout, profile};
pub use strategy::{AuthStrategy, Authenticator};
pub use users::User;
