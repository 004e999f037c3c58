//! Error handling - maps failures onto the uniform JSON envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use scribe_shared::ErrorResponse;
use std::fmt;

use scribe_core::error::{RepoError, StorageError};

/// Application-level error type. Every variant renders as the envelope
/// `{success: false, error, message?}` with the matching status code.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::BadRequest(detail) => ErrorResponse::new(detail.clone()),
            AppError::NotFound(detail) => ErrorResponse::new(detail.clone()),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::new("internal server error").with_message(detail.clone())
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from core errors. A missing row is modeled as `Ok(None)` at the
// repository level, so every surviving repo error is a store failure.
impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Rejected(msg) => AppError::BadRequest(msg),
            e @ StorageError::Io(_) => AppError::Internal(e.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
