use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("No saved record found for '{0}'")]
    NotFound(String),

    #[error("A record named '{0}' already exists")]
    AlreadyExists(String),

    #[error("Exactly one of isCreate and isUpdate must be true")]
    InvalidIntent,

    #[error("Mapping failed: {0}")]
    Mapping(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type EventResult<T> = Result<T, EventError>;

/// Convert EventError to AppError for standardized error responses.
///
/// Everything behind the controller boundary (domain rules, mapping, data
/// access) reports as a server error with the failure message in the body;
/// only input validation is a client error.
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Validation(msg) => AppError::BadRequest(msg),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
