//! JSON request body decoding.

use crate::api::error::ApiError;
use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::warn;

/// Decode a JSON body.
///
/// An empty (or all-whitespace) body reads as `{}` so the endpoint's presence
/// checks report the missing fields. Well-formed JSON with the wrong shape
/// becomes `on_data_error`; a non-JSON content type or malformed JSON is an
/// unhandled 500.
pub fn parse_json<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: &[u8],
    on_data_error: ApiError,
) -> Result<T, ApiError> {
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else if is_json_content_type(headers) {
        body
    } else {
        return Err(ApiError::internal(
            "Expected request with `Content-Type: application/json`",
        ));
    };

    serde_json::from_slice(body).map_err(|e| match e.classify() {
        Category::Data => {
            warn!("Rejected request body: {}", e);
            on_data_error
        }
        _ => ApiError::internal(format!("Failed to parse the request body as JSON: {}", e)),
    })
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
