pub mod profile;
pub mod subscriber;
pub mod template;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::validation::ValidationOutcome;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(String),
    ValidationError(String),
    NotFound(String),
    Conflict(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::DatabaseError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        };

        (status, message).into_response()
    }
}

pub fn require_valid(outcome: ValidationOutcome) -> Result<(), AppError> {
    if outcome.is_valid {
        Ok(())
    } else {
        Err(AppError::ValidationError(
            outcome.error.unwrap_or_default(),
        ))
    }
}
