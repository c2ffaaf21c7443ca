/// Error types for the related-content service
///
/// Errors are converted to structured JSON responses at the HTTP boundary.
/// Every variant carries a public machine-readable code alongside the
/// human-readable message.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use thiserror::Error;

/// Result type for service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or out-of-range request parameters, rejected before any
    /// store access
    #[error("Invalid parameter: {0}")]
    ValidationError(String),

    /// Source post does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Content store operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code exposed to API clients
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "rest_invalid_param",
            AppError::NotFound(_) => "post_not_found",
            AppError::DatabaseError(_) => "store_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        HttpResponse::build(status).json(serde_json::json!({
            "success": false,
            "code": self.code(),
            "error": self.to_string(),
            "status": status.as_u16(),
        }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
