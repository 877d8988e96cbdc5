//! Authentication Module
//! Mission: Register credentials, issue bearer tokens and gate protected routes

pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod user_store;

pub use api::AuthState;
pub use jwt::JwtHandler;
pub use middleware::{auth_middleware, verify_token, AuthError};
pub use user_store::UserStore;
