//! Authentication Middleware
//! Mission: Gate protected endpoints behind bearer token verification

use crate::api::error::ApiError;
use crate::auth::{
    jwt::{JwtHandler, TokenError},
    models::{AuthenticatedUser, Claims},
};
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

/// Gate failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidFormat,
    ExpiredToken,
    InvalidToken,
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => {
                ApiError::Authentication("Acesso negado. Token não fornecido.".to_string())
            }
            AuthError::InvalidFormat => {
                ApiError::Authentication("Acesso negado. Token inválido.".to_string())
            }
            AuthError::ExpiredToken => {
                ApiError::Authorization("Acesso negado. Token expirado.".to_string())
            }
            AuthError::InvalidToken => {
                ApiError::Authorization("Acesso negado. Token inválido.".to_string())
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let mut response = ApiError::from(self).into_response();
        // Lets the request logger tell gate rejections from handler errors
        response.extensions_mut().insert(self);
        response
    }
}

/// Pull the token out of `Authorization: Bearer <token>`
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers.get(AUTHORIZATION).ok_or(AuthError::MissingToken)?;
    let value = value.to_str().map_err(|_| AuthError::InvalidFormat)?;

    // Segments are split on single spaces: "Bearer  tok" carries an empty token
    let mut segments = value.split(' ');
    let scheme = segments.next().unwrap_or_default();
    let token = segments.next().unwrap_or_default();

    if !scheme.eq_ignore_ascii_case("Bearer") || token.is_empty() {
        return Err(AuthError::InvalidFormat);
    }
    Ok(token)
}

/// Verify the request's bearer token as of `now` (unix seconds).
pub fn verify_token(headers: &HeaderMap, jwt: &JwtHandler, now: i64) -> Result<Claims, AuthError> {
    let token = bearer_token(headers)?;
    jwt.validate_token_at(token, now).map_err(|e| match e {
        TokenError::Expired => AuthError::ExpiredToken,
        TokenError::Invalid => AuthError::InvalidToken,
    })
}

/// Auth middleware that validates JWT tokens
pub async fn auth_middleware(
    State(jwt_handler): State<Arc<JwtHandler>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let claims = verify_token(req.headers(), &jwt_handler, Utc::now().timestamp()).map_err(|e| {
        debug!(path = %req.uri().path(), "Gate rejected request: {:?}", e);
        e
    })?;

    let user = AuthenticatedUser(claims.username.clone());

    // Add claims to request extensions so handlers can access them
    req.extensions_mut().insert(claims);

    let mut response = next.run(req).await;
    response.extensions_mut().insert(user);
    Ok(response)
}
