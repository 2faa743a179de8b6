use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures raised by the repositories.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Blocking task failed: {0}")]
    Task(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// The store call that failed. Each one has its own client-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOp {
    SaveUser,
    FetchUsers,
    SaveExercise,
    FindUser,
    RetrieveUser,
    RetrieveExercises,
}

impl StoreOp {
    pub fn message(&self) -> &'static str {
        match self {
            StoreOp::SaveUser => "Error saving user",
            StoreOp::FetchUsers => "Error fetching users",
            StoreOp::SaveExercise => "Error saving exercise",
            StoreOp::FindUser => "Error finding user",
            StoreOp::RetrieveUser => "Error retrieving user",
            StoreOp::RetrieveExercises => "Error retrieving exercises",
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{}: {source}", .op.message())]
    Store {
        op: StoreOp,
        #[source]
        source: StoreError,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Attach the failing store operation to a repository result.
pub trait StoreContext<T> {
    fn store_op(self, op: StoreOp) -> Result<T>;
}

impl<T> StoreContext<T> for StoreResult<T> {
    fn store_op(self, op: StoreOp) -> Result<T> {
        self.map_err(|source| AppError::Store { op, source })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Store { op, source } => {
                tracing::error!("{}: {:?}", op.message(), source);
                (StatusCode::INTERNAL_SERVER_ERROR, op.message().to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Parse(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
