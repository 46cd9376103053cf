//! Error boundary - translates core errors into the API's `{message}` bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use skola_core::error::RepoError;
use skola_core::ports::AuthError;
use skola_shared::{ErrorBody, FieldError};

/// Application-level error type for handler results.
///
/// Credential failures are deliberately a single variant: unknown email and
/// wrong password must be indistinguishable to the client. Store and hashing
/// failures surface as an opaque 500; their detail goes to the log only.
#[derive(Debug)]
pub enum AppError {
    Validation(Vec<FieldError>),
    IncorrectCredentials,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::IncorrectCredentials => write!(f, "Incorrect credentials"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::IncorrectCredentials => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(errors) => {
                ErrorBody::with_errors("Invalid input", errors.clone())
            }
            AppError::IncorrectCredentials => ErrorBody::new("Incorrect credentials"),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorBody::new("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => {
                tracing::error!("Store connection error: {}", msg);
                AppError::Internal("Store error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Store query error: {}", msg);
                AppError::Internal("Store error".to_string())
            }
            RepoError::NotFound => AppError::Internal("Record not found".to_string()),
            RepoError::Constraint(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
