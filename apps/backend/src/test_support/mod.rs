//! Helpers shared by unit and integration tests. Kept in the library so
//! `tests/` binaries can reuse the production route and middleware setup.

pub mod app_builder;
pub mod logging;

pub use app_builder::create_test_app;
