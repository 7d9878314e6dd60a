//! Waste Tracking Error Types
//!
//! This module provides domain-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Domain-specific result type alias
pub type WasteResult<T> = Result<T, WasteError>;

/// Domain-specific error variants
#[derive(Debug, Error)]
pub enum WasteError {
    /// Name or flat-number collision ("apartment" / "resident")
    #[error("this {0} already exists")]
    DuplicateEntity(&'static str),

    /// Unknown identity or password mismatch - deliberately merged so
    /// callers cannot enumerate accounts
    #[error("incorrect credentials")]
    InvalidCredentials,

    /// Resident registration against an unknown apartment
    #[error("this apartment does not exist")]
    ApartmentNotFound,

    /// Waste logging or dashboard against an unknown resident
    #[error("this resident does not exist")]
    ResidentNotFound,

    /// Input validation failure (names, flat numbers, months, amounts)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WasteError {
    /// Get the HTTP status code for this error
    ///
    /// Domain failures all map to 400; the client-facing contract is a
    /// uniform `{message}` envelope, not a status taxonomy.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WasteError::DuplicateEntity(_)
            | WasteError::InvalidCredentials
            | WasteError::ApartmentNotFound
            | WasteError::ResidentNotFound
            | WasteError::Validation(_) => StatusCode::BAD_REQUEST,
            WasteError::Database(_) | WasteError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WasteError::DuplicateEntity(_)
            | WasteError::InvalidCredentials
            | WasteError::ApartmentNotFound
            | WasteError::ResidentNotFound
            | WasteError::Validation(_) => ErrorKind::BadRequest,
            WasteError::Database(_) | WasteError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WasteError::Database(e) => {
                tracing::error!(error = %e, "Waste database error");
            }
            WasteError::Internal(msg) => {
                tracing::error!(message = %msg, "Waste internal error");
            }
            WasteError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Waste domain error");
            }
        }
    }
}

impl IntoResponse for WasteError {
    fn into_response(self) -> Response {
        self.log();
        match self {
            // Storage failures are surfaced as-is through the kernel's
            // sqlx mapping (unique/FK violations, pool exhaustion, ...)
            WasteError::Database(e) => AppError::from(e).into_response(),
            other => other.to_app_error().into_response(),
        }
    }
}

impl From<AppError> for WasteError {
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::BadRequest {
            WasteError::Validation(err.message().to_string())
        } else {
            WasteError::Internal(err.message().to_string())
        }
    }
}
