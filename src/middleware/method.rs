//! JSON body for 405 responses produced by the router.

use crate::api::error::ApiError;
use axum::{
    http::{header::CONTENT_LENGTH, StatusCode},
    response::{IntoResponse, Response},
};

/// Swap the router's empty 405 body for the API's `{message}` shape.
/// Status, `Allow` and extensions are kept.
pub async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    let (json_parts, body) = ApiError::MethodNotAllowed.into_response().into_parts();
    parts.headers.remove(CONTENT_LENGTH);
    parts.headers.extend(json_parts.headers);
    Response::from_parts(parts, body)
}
