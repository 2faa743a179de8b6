use std::path::Path;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{exercises, health, home, users};

pub fn create_router(
    users_state: users::UsersState,
    exercises_state: exercises::ExercisesState,
    public_dir: impl AsRef<Path>,
) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health_check))
        // User routes
        .route("/api/users", get(users::list).post(users::create))
        .with_state(users_state)
        // Exercise routes
        .route("/api/users/{_id}/exercises", post(exercises::create))
        .route("/api/users/{_id}/logs", get(exercises::logs))
        .with_state(exercises_state)
        // Static assets
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}
