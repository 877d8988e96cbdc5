//! Request logging middleware.
//!
//! One line per request with method, path, status, latency and, on gated
//! routes, the token holder.

use crate::auth::{models::AuthenticatedUser, AuthError};
use axum::{body::Body, http::Request, http::StatusCode, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

/// How a finished request is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// Turned away by the token gate
    Rejected(AuthError),
    ClientError,
    ServerError,
}

impl Outcome {
    pub fn classify(status: StatusCode, gate: Option<AuthError>) -> Self {
        if status.is_server_error() {
            Outcome::ServerError
        } else if let Some(reason) = gate {
            Outcome::Rejected(reason)
        } else if status.is_client_error() {
            Outcome::ClientError
        } else {
            Outcome::Completed
        }
    }
}

/// INFO for completed requests, WARN for 4xx, ERROR for 5xx. `/health` is skipped.
pub async fn request_logging(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    if path == "/health" {
        return next.run(request).await;
    }

    let start = Instant::now();
    let response = next.run(request).await;
    let latency_ms = start.elapsed().as_millis();
    let status = response.status();

    let user = response
        .extensions()
        .get::<AuthenticatedUser>()
        .map(|u| u.0.as_str())
        .unwrap_or("-");
    let gate = response.extensions().get::<AuthError>().copied();

    match Outcome::classify(status, gate) {
        Outcome::ServerError => error!(
            method = %method, path = %path, status = status.as_u16(), user, latency_ms,
            "Request failed"
        ),
        Outcome::Rejected(reason) => warn!(
            method = %method, path = %path, status = status.as_u16(), latency_ms,
            "Request rejected by token gate: {:?}", reason
        ),
        Outcome::ClientError => warn!(
            method = %method, path = %path, status = status.as_u16(), user, latency_ms,
            "Request refused"
        ),
        Outcome::Completed => info!(
            method = %method, path = %path, status = status.as_u16(), user, latency_ms,
            "Request completed"
        ),
    }

    response
}
