use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::{AppError, ErrorCode, errors::ErrorResponse};
use thiserror::Error;

use crate::id::InvalidTaskId;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    InvalidId(#[from] InvalidTaskId),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(id) => AppError::NotFound(format!("Task {} not found", id)),
            TaskError::InvalidId(err) => AppError::NotFound(err.to_string()),
            TaskError::Validation(msg) => AppError::BadRequest(msg),
            TaskError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        match self {
            // A malformed id is indistinguishable from an absent record for the
            // caller, so it renders as 404 with its own error code.
            TaskError::InvalidId(err) => {
                let body = Json(ErrorResponse {
                    code: ErrorCode::InvalidIdentifier.code(),
                    error: ErrorCode::InvalidIdentifier.as_str().to_string(),
                    message: err.to_string(),
                    details: None,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            other => AppError::from(other).into_response(),
        }
    }
}

impl From<mongodb::error::Error> for TaskError {
    fn from(err: mongodb::error::Error) -> Self {
        TaskError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for TaskError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        TaskError::Database(err.to_string())
    }
}
