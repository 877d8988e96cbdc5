//! API error type shared by every handler.
//!
//! Every failure is rendered as a JSON object with a single `message` field.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor.";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Método não permitido.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400: missing or mistyped input
    Validation(String),
    /// 401: bad credentials or missing token
    Authentication(String),
    /// 403: invalid or expired token
    Authorization(String),
    /// 404
    NotFound(String),
    /// 405
    MethodNotAllowed,
    /// 500; the detail is logged, never sent
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(detail: impl std::fmt::Display) -> Self {
        ApiError::Internal(detail.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Authorization(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Validation(m)
            | ApiError::Authentication(m)
            | ApiError::Authorization(m)
            | ApiError::NotFound(m) => m,
            ApiError::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE.to_string(),
            ApiError::Internal(detail) => {
                error!("Unhandled error: {}", detail);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
