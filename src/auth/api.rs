//! Authentication API Endpoints
//! Mission: Provide registration and login endpoints

use crate::api::{body::parse_json, error::ApiError};
use crate::auth::{
    jwt::JwtHandler,
    models::{CredentialsRequest, LoginResponse},
    user_store::UserStore,
};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

const MISSING_CREDENTIALS: &str = "Usuário e senha são obrigatórios!";
const INVALID_CREDENTIALS: &str = "Credenciais inválidas!";

/// Shared auth state
#[derive(Clone)]
pub struct AuthState {
    pub user_store: Arc<UserStore>,
    pub jwt_handler: Arc<JwtHandler>,
}

impl AuthState {
    pub fn new(user_store: Arc<UserStore>, jwt_handler: Arc<JwtHandler>) -> Self {
        Self {
            user_store,
            jwt_handler,
        }
    }
}

fn invalid_credentials() -> ApiError {
    ApiError::Authentication(INVALID_CREDENTIALS.to_string())
}

/// Register endpoint - POST /register
pub async fn register(
    State(state): State<AuthState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let payload: CredentialsRequest =
        parse_json(&headers, &body, ApiError::validation(MISSING_CREDENTIALS))?;

    let (username, password) = payload
        .present()
        .map(|(u, p)| (u.to_string(), p.to_string()))
        .ok_or_else(|| ApiError::validation(MISSING_CREDENTIALS))?;

    let store = state.user_store.clone();
    tokio::task::spawn_blocking(move || store.create_user(&username, &password))
        .await
        .map_err(ApiError::internal)?
        .map_err(ApiError::internal)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Usuário registrado com sucesso!" })),
    ))
}

/// Login endpoint - POST /login
pub async fn login(
    State(state): State<AuthState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let payload: CredentialsRequest = parse_json(&headers, &body, invalid_credentials())?;

    let (username, password) = payload
        .present()
        .map(|(u, p)| (u.to_string(), p.to_string()))
        .ok_or_else(invalid_credentials)?;

    info!("🔐 Login attempt: {}", username);

    // Verify credentials
    let store = state.user_store.clone();
    let candidate = username.clone();
    let valid = tokio::task::spawn_blocking(move || store.verify_password(&candidate, &password))
        .await
        .map_err(ApiError::internal)?
        .map_err(ApiError::internal)?;

    if !valid {
        warn!("❌ Failed login attempt: {}", username);
        return Err(invalid_credentials());
    }

    let jwt = state
        .jwt_handler
        .generate_token(&username)
        .map_err(ApiError::internal)?;

    info!("✅ Login successful: {}", username);

    Ok(Json(LoginResponse {
        message: format!("Login efetuado pelo usuário {}", username),
        jwt,
    }))
}
