use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use exercise_tracker::error::{AppError, StoreError, StoreOp};

#[test]
fn test_not_found_returns_404() {
    let error = AppError::NotFound("User not found".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_bad_request_returns_400() {
    let error = AppError::BadRequest("Invalid input".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_validation_returns_400() {
    let error = AppError::Validation("Username is required".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_parse_returns_400() {
    let error = AppError::Parse("Invalid duration: abc".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn test_internal_returns_500() {
    let error = AppError::Internal("Something went wrong".to_string());
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_store_error_returns_500_with_op_message() {
    let error = AppError::Store {
        op: StoreOp::RetrieveUser,
        source: StoreError::Task("join error".to_string()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Error retrieving user");
}

#[test]
fn test_store_ops_have_distinct_messages() {
    let ops = [
        StoreOp::SaveUser,
        StoreOp::FetchUsers,
        StoreOp::SaveExercise,
        StoreOp::FindUser,
        StoreOp::RetrieveUser,
        StoreOp::RetrieveExercises,
    ];
    let mut messages: Vec<_> = ops.iter().map(|op| op.message()).collect();
    messages.sort();
    messages.dedup();

    assert_eq!(messages.len(), ops.len());
}
