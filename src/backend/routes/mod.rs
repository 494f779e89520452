//! Routes Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router creation, fallback and layers
//! └── api_routes.rs   - Authentication, place and comment routes
//! ```

/// Main router configuration
pub mod router;

/// API route configuration
pub mod api_routes;

pub use router::create_router;
