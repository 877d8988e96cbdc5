//! Student records: data model, derived grades and the in-memory store.

pub mod models;
pub mod store;

pub use models::{AverageEntry, NewStudent, StatusEntry, StudentPatch, StudentRecord};
pub use store::StudentStore;
