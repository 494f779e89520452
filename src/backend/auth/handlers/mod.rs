//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - POST /authentication
//! ├── profile.rs  - GET /authentication/profile
//! └── logout.rs   - POST /authentication/logout
//! ```

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Current-user profile handler
pub mod profile;

/// Logout handler
pub mod logout;

pub use types::{LoginRequest, LoginResponse, MessageResponse};

pub use login::login;
pub use logout::logout;
pub use profile::profile;
