//! Error handling - maps every failure into the response envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use quill_shared::ResponseWrapper;
use std::fmt;

/// Application-level error type that converts to envelope responses.
///
/// Messages here are user-facing; internal detail stays in the logs.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    SummaryFailed(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::SummaryFailed(msg) => write!(f, "Summary failed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::SummaryFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        let message = match self {
            AppError::NotFound(detail) => detail.clone(),
            AppError::BadRequest(detail) => {
                format!("{} Please correct the errors and try again.", detail)
            }
            AppError::SummaryFailed(detail) => {
                tracing::error!("Summary generation failed: {}", detail);
                "An error occurred while processing your request. Please try again later."
                    .to_string()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "An unexpected error occurred. Please try again later.".to_string()
            }
        };

        HttpResponse::build(status)
            .json(ResponseWrapper::<()>::error(message, status.as_u16()))
    }
}

// Conversion from domain errors
impl From<quill_core::DomainError> for AppError {
    fn from(err: quill_core::DomainError) -> Self {
        match err {
            quill_core::DomainError::NotFound { id } => {
                AppError::NotFound(format!("Sorry, we couldn't find a blog with the ID: {}", id))
            }
            quill_core::DomainError::Validation(msg) => AppError::BadRequest(msg),
            quill_core::DomainError::SummaryUnavailable(e) => {
                AppError::SummaryFailed(e.to_string())
            }
            quill_core::DomainError::Repo(e) => AppError::Internal(e.to_string()),
            quill_core::DomainError::Cache(e) => AppError::Internal(e.to_string()),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
