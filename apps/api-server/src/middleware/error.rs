//! Error handling - every handled failure becomes `{"message": ...}`.

use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use board_core::error::{DomainError, RepoError};
use board_shared::ErrorResponse;
use board_shared::validation::{Violations, messages};

/// Application-level error type rendered by actix-web.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request failed a field constraint or could not be parsed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced user or post does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            // Missing entities are a client error on this API, not a 404.
            AppError::NotFound(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Validation(message) | AppError::NotFound(message) => {
                ErrorResponse::new(message.as_str())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<Violations> for AppError {
    fn from(violations: Violations) -> Self {
        for violation in violations.iter() {
            tracing::debug!(
                field = violation.field,
                message = violation.message.as_deref(),
                "Constraint violated"
            );
        }
        AppError::Validation(violations.first_message().to_string())
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(message) => AppError::NotFound(message.to_string()),
            DomainError::Repository(err) => err.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Constraint(msg) => {
                tracing::error!("Database constraint error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

/// Route JSON, path and query extractor failures through the validation mapping.
pub fn extractor_error(err: impl std::fmt::Display, req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(path = %req.path(), error = %err, "Rejected unparsable request");
    AppError::Validation(messages::INVALID_ARGUMENT.to_string()).into()
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
