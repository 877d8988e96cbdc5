//! Application state and router assembly.

use crate::{
    api::{self, students},
    auth::{api as auth_api, auth_middleware, AuthState, JwtHandler, UserStore},
    config::Config,
    middleware::{json_method_not_allowed, request_logging},
    students::StudentStore,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Process-scoped state. Each instance owns fresh stores, so tests can build
/// isolated apps side by side.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub students: Arc<StudentStore>,
}

impl AppState {
    pub fn new(user_store: UserStore, jwt_handler: JwtHandler, students: StudentStore) -> Self {
        Self {
            auth: AuthState::new(Arc::new(user_store), Arc::new(jwt_handler)),
            students: Arc::new(students),
        }
    }

    /// Seeded student list, empty credential list, settings from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            UserStore::with_cost(config.bcrypt_cost),
            JwtHandler::with_ttl(&config.jwt_secret, config.token_ttl_secs),
            StudentStore::seeded(),
        )
    }
}

pub fn build_router(state: AppState) -> Router {
    let auth_router = Router::new()
        .route("/register", post(auth_api::register))
        .route("/login", post(auth_api::login))
        .with_state(state.auth.clone());

    let protected_routes = Router::new()
        .route(
            "/alunos",
            get(students::list_students).post(students::create_student),
        )
        .route("/alunos/medias", get(students::list_averages))
        .route("/alunos/aprovados", get(students::list_pass_fail))
        .route(
            "/alunos/:id",
            get(students::get_student)
                .put(students::update_student)
                .delete(students::delete_student),
        )
        .route_layer(middleware::from_fn_with_state(
            state.auth.jwt_handler.clone(),
            auth_middleware,
        ))
        .with_state(state.students.clone());

    let public_routes = Router::new()
        .route("/health", get(api::health_check))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(auth_router)
        .merge(protected_routes)
        .fallback(api::fallback)
        .layer(middleware::map_response(json_method_not_allowed))
        .layer(middleware::from_fn(request_logging))
        .layer(CorsLayer::permissive())
}
