//! Service error types with HTTP status code mapping.
//!
//! [`PickerError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ChoiceId, ListId};

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "list not found: 7"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category        | HTTP Status                         |
/// |-----------|-----------------|-------------------------------------|
/// | 1000–1999 | Validation      | 422 / 400 / 415 (request parsing)   |
/// | 2000–2999 | State/Not Found | 404 Not Found / 409 Conflict / 400  |
/// | 3000–3999 | Server          | 500 Internal Server Error           |
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// A required string field was empty or whitespace-only, or too long.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The body or path could not be parsed into the expected shape.
    ///
    /// `status` is the one axum's extractor chose (400, 415 or 422).
    #[error("malformed request: {message}")]
    MalformedRequest {
        /// HTTP status reported by the failed extractor.
        status: StatusCode,
        /// Extractor's description of the failure.
        message: String,
    },

    /// List with the given ID was not found.
    #[error("list not found: {0}")]
    ListNotFound(ListId),

    /// Choice with the given ID was not found.
    #[error("choice not found: {0}")]
    ChoiceNotFound(ChoiceId),

    /// Another list already uses this (trimmed) name.
    #[error("list with this name already exists: {0}")]
    DuplicateListName(String),

    /// A pick was requested on a list that has no choices.
    #[error("list has no choices: {0}")]
    EmptyList(ListId),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl PickerError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Validation(_) => 1001,
            Self::MalformedRequest { .. } => 1002,
            Self::ListNotFound(_) => 2001,
            Self::ChoiceNotFound(_) => 2002,
            Self::DuplicateListName(_) => 2003,
            Self::EmptyList(_) => 2004,
            Self::Persistence(_) => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MalformedRequest { status, .. } => *status,
            Self::ListNotFound(_) | Self::ChoiceNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateListName(_) => StatusCode::CONFLICT,
            Self::EmptyList(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for PickerError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for PickerError {
    fn from(rejection: PathRejection) -> Self {
        Self::MalformedRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for PickerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        };
        (status, axum::Json(body)).into_response()
    }
}
