//! Student Record Endpoints
//! Mission: CRUD and grade summaries over `/alunos`, behind the token gate

use crate::api::{body::parse_json, error::ApiError};
use crate::auth::models::Claims;
use crate::students::{
    AverageEntry, NewStudent, StatusEntry, StudentPatch, StudentRecord, StudentStore,
};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

const NOT_FOUND: &str = "Aluno não encontrado!";
const INCOMPLETE: &str = "Dados incompletos!";

/// Parse a path id the way `parseInt` does: optional leading whitespace and
/// sign, then the leading run of digits. Anything else matches no record.
pub fn parse_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..digits_end].parse().ok()?;

    Some(if negative { -magnitude } else { magnitude })
}

fn lookup_id(raw: &str) -> Result<i64, ApiError> {
    parse_id(raw).ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

/// GET /alunos
pub async fn list_students(State(store): State<Arc<StudentStore>>) -> Json<Vec<StudentRecord>> {
    Json(store.list_all())
}

/// GET /alunos/medias
pub async fn list_averages(State(store): State<Arc<StudentStore>>) -> Json<Vec<AverageEntry>> {
    Json(store.list_averages())
}

/// GET /alunos/aprovados
pub async fn list_pass_fail(State(store): State<Arc<StudentStore>>) -> Json<Vec<StatusEntry>> {
    Json(store.list_pass_fail())
}

/// GET /alunos/:id
pub async fn get_student(
    State(store): State<Arc<StudentStore>>,
    Path(id): Path<String>,
) -> Result<Json<StudentRecord>, ApiError> {
    let id = lookup_id(&id)?;
    store
        .get_by_id(id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(NOT_FOUND))
}

/// POST /alunos
pub async fn create_student(
    State(store): State<Arc<StudentStore>>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let payload: NewStudent = parse_json(&headers, &body, ApiError::validation(INCOMPLETE))?;

    let record = payload
        .into_record()
        .ok_or_else(|| ApiError::validation(INCOMPLETE))?;

    info!(user = %claims.username, "Creating student {}", record.id);
    store.create(record);

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Aluno cadastrado com sucesso!" })),
    ))
}

/// PUT /alunos/:id
pub async fn update_student(
    State(store): State<Arc<StudentStore>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let id = lookup_id(&id)?;
    let patch: StudentPatch = parse_json(&headers, &body, ApiError::validation(INCOMPLETE))?;

    if !store.update(id, patch) {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    info!(user = %claims.username, "Updated student {}", id);
    Ok(Json(json!({ "message": "Aluno atualizado com sucesso!" })))
}

/// DELETE /alunos/:id
pub async fn delete_student(
    State(store): State<Arc<StudentStore>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = lookup_id(&id)?;

    if !store.delete(id) {
        return Err(ApiError::not_found(NOT_FOUND));
    }

    info!(user = %claims.username, "Deleted student {}", id);
    Ok(Json(json!({ "message": "Aluno deletado com sucesso!" })))
}
