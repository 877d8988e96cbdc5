//! HTTP API handlers

pub mod body;
pub mod error;
pub mod students;

use crate::app::AppState;
use axum::{extract::State, http::Uri, response::Json};
use error::ApiError;
use serde_json::{json, Value};

/// Health check - GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "records": state.students.len(),
        "users": state.auth.user_store.len(),
    }))
}

/// JSON 404 for unmatched routes
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Rota não encontrada: {}", uri.path()))
}
