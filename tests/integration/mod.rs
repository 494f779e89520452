//! API integration tests
//!
//! Drive the full router (layers included) through `axum-test`.

mod auth_test;
mod places_test;
