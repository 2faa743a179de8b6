#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use exercise_tracker::db::{create_memory_pool, DbPool};
use exercise_tracker::handlers::{exercises, users};
use exercise_tracker::migrations::run_migrations;
use exercise_tracker::models::User;
use exercise_tracker::repositories::{ExerciseRepository, UserRepository};
use exercise_tracker::services::{ExerciseService, LogService, UserService};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let user_repo = UserRepository::new(pool.clone());
    let exercise_repo = ExerciseRepository::new(pool);

    let users_state = users::UsersState {
        user_service: UserService::new(user_repo.clone()),
    };
    let exercises_state = exercises::ExercisesState {
        exercise_service: ExerciseService::new(user_repo.clone(), exercise_repo.clone()),
        log_service: LogService::new(user_repo, exercise_repo),
    };

    exercise_tracker::routes::create_router(
        users_state,
        exercises_state,
        concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
    )
}

pub async fn create_test_user(pool: &DbPool, username: &str) -> User {
    UserRepository::new(pool.clone())
        .create(username)
        .await
        .unwrap()
}

pub async fn create_test_exercise(
    pool: &DbPool,
    user_id: &str,
    description: &str,
    duration: i64,
    date: &str,
) {
    let date = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    ExerciseRepository::new(pool.clone())
        .create(user_id, description, duration, date)
        .await
        .unwrap();
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send a request and return the status and raw body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let (status, body) = send(app, request).await;
    let json = serde_json::from_str(&body)
        .unwrap_or_else(|_| panic!("expected JSON body, got {:?}", body));
    (status, json)
}
