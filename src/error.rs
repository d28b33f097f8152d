use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// The primary error type for the application.
///
/// This enum consolidates all classified outcomes a service call can fail
/// with, providing a unified way to map failures to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Registration with an email that is already taken.
    #[error("email already registered")]
    DuplicateEmail,
    /// Creating a book that already exists in the caller's library.
    /// The message differentiates an ISBN match from a title/author match.
    #[error("{0}")]
    DuplicateBook(String),
    /// Adding a second review to a book the caller already reviewed.
    #[error("you have already reviewed this book")]
    AlreadyReviewed,
    /// Login failure. Deliberately identical for unknown email and wrong
    /// password to avoid user enumeration.
    #[error("invalid email or password")]
    InvalidCredentials,
    /// Missing, malformed or expired session token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    /// Ownership mismatch or missing resource, treated identically so that
    /// foreign callers cannot probe for existence.
    #[error("access denied: {0}")]
    AccessDenied(String),
    /// Resource absent after an ownership-scoped lookup.
    #[error("not found: {0}")]
    NotFound(String),
    /// A progress update beyond the book's page count.
    #[error("{0}")]
    InvalidPage(String),
    /// An explicit `Finished` request before the final page.
    #[error("{0}")]
    IncompletePages(String),
    /// A specific request field failed validation.
    #[error("validation error on field '{field}': {message}")]
    ValidationError { field: String, message: String },
    /// Other client errors due to invalid requests.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Errors surfaced by the persistence layer.
    #[error("database error: {0}")]
    Database(String),
    /// The persistence layer is temporarily unavailable.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Internal errors that are not expected to be handled by the client.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, error_message, details) = match self {
            AppError::DuplicateEmail => {
                (StatusCode::CONFLICT, "DUPLICATE_EMAIL", "email already registered".to_string(), None)
            }
            AppError::DuplicateBook(msg) => (StatusCode::CONFLICT, "DUPLICATE_BOOK", msg, None),
            AppError::AlreadyReviewed => (
                StatusCode::CONFLICT,
                "ALREADY_REVIEWED",
                "you have already reviewed this book".to_string(),
                None,
            ),
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "invalid email or password".to_string(),
                None,
            ),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg, None),
            AppError::AccessDenied(msg) => (StatusCode::FORBIDDEN, "ACCESS_DENIED", msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            AppError::InvalidPage(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_PAGE", msg, None)
            }
            AppError::IncompletePages(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INCOMPLETE_PAGES", msg, None)
            }
            AppError::ValidationError { field, message } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Validation failed for field '{}'", field),
                Some(json!({ "field": field, "message": message })),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg, None),
            AppError::Database(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                    Some(json!({ "details": msg })),
                )
            }
            AppError::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "SERVICE_UNAVAILABLE", msg, None)
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                let error_id = uuid::Uuid::new_v4();
                tracing::error!("Error ID: {}", error_id);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                    Some(json!({ "error_id": error_id.to_string() })),
                )
            }
        };

        let mut body = json!({
            "error": {
                "code": error_code,
                "message": error_message,
            },
            "status": status.as_u16(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        });

        if let Some(details) = details {
            body["error"]["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Record not found".to_string()),
            sqlx::Error::Database(db_err) => {
                AppError::Database(format!("Database error: {}", db_err.message()))
            }
            sqlx::Error::PoolTimedOut => {
                AppError::ServiceUnavailable("Database connection pool timed out".to_string())
            }
            _ => AppError::Database(format!("Database error: {}", err)),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(anyhow::anyhow!("I/O error: {}: {}", err.kind(), err))
    }
}

/// A type alias for `Result<T, AppError>`, used throughout the application.
pub type AppResult<T> = Result<T, AppError>;

/// An extension trait for `Option` that provides a convenient way to convert
/// an `Option` to a `Result` with a `NotFound` error.
pub trait OptionExt<T> {
    /// Converts `None` into `AppError::NotFound`, naming the missing entity.
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(format!("{} not found", entity)))
    }
}

/// A module containing helper functions for request validation.
pub mod validation {
    use super::*;

    /// Rejects empty or whitespace-only strings.
    pub fn validate_non_empty(value: &str, field: &str) -> AppResult<()> {
        if value.trim().is_empty() {
            return Err(AppError::ValidationError {
                field: field.to_string(),
                message: format!("{} cannot be empty", field),
            });
        }
        Ok(())
    }

    /// Validates that a value lies within an inclusive range.
    pub fn validate_range(value: i64, min: i64, max: i64, field: &str) -> AppResult<()> {
        if value < min || value > max {
            return Err(AppError::ValidationError {
                field: field.to_string(),
                message: format!("Value must be between {} and {}, got {}", min, max, value),
            });
        }
        Ok(())
    }

    /// Validates that a number is not negative.
    pub fn validate_non_negative(value: i64, field: &str) -> AppResult<()> {
        if value < 0 {
            return Err(AppError::ValidationError {
                field: field.to_string(),
                message: format!("Value must not be negative, got {}", value),
            });
        }
        Ok(())
    }
}
