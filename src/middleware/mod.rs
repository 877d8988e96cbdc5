//! Cross-cutting HTTP middleware.

pub mod logging;
pub mod method;

pub use logging::request_logging;
pub use method::json_method_not_allowed;
