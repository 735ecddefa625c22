//! Unified error handling for route handlers.
//!
//! All handlers return `Result<T, ApiError>`; the `IntoResponse` impl turns
//! every failure into the standard envelope. The taxonomy keeps the three
//! 4xx/5xx families the API distinguishes apart:
//!
//! - client mistakes (validation, bad path labels) -> 400
//! - a point lookup with no row -> 404
//! - database failures and stored-data corruption -> 500, with distinct
//!   descriptions, because the client did nothing wrong

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::envelope;
use crate::models::ShapeError;
use crate::validate::ValidationFailure;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed validation at the boundary.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationFailure),

    /// A path or query value was malformed (e.g. an unknown enum label).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Point lookup returned no record.
    #[error("Not found")]
    NotFound,

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// A stored record failed normalization on read.
    #[error("Data integrity error: {0}")]
    Integrity(#[from] ShapeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Server-side failures are logged with their cause; the client only
        // sees which family the failure belongs to.
        match &self {
            Self::Database(e) => {
                tracing::error!(error = %e, "Database operation failed");
            }
            Self::Integrity(e) => {
                tracing::error!(error = %e, "Stored record failed normalization");
            }
            Self::Validation(e) => {
                tracing::warn!(error = %e, "Request validation failed");
            }
            Self::BadRequest(_) | Self::NotFound => {}
        }

        let (status, description) = match self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::BadRequest(description) => (StatusCode::BAD_REQUEST, description),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "The requested record does not exist.".to_string(),
            ),
            Self::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "The operation could not be completed.".to_string(),
            ),
            Self::Integrity(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "A stored record is invalid.".to_string(),
            ),
        };

        envelope::failure(status, description)
    }
}
