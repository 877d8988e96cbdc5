//! Student records API
//!
//! Exposes the router, state and stores for use by the binary and tests.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod middleware;
pub mod students;

pub use app::{build_router, AppState};
pub use config::Config;
