//! API error type and JSON error body.

use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::handlers::{CurriculumCommandError, ProgressCommandError};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(ErrorResponse),
    NotFound(ErrorResponse),
    Conflict(ErrorResponse),
    Internal(ErrorResponse),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(ErrorResponse::new("BAD_REQUEST", message))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::BadRequest(ErrorResponse::new("VALIDATION_FAILED", err.to_string()))
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let body = ErrorResponse::new(err.code.to_string(), err.message.clone());
        let body = if err.details.is_empty() {
            body
        } else {
            body.with_details(serde_json::json!(err.details))
        };

        match err.code {
            ErrorCode::ItemNotFound => ApiError::NotFound(body),
            ErrorCode::DuplicateItemId => ApiError::Conflict(body),
            ErrorCode::StorageError => ApiError::Internal(body),
            _ => ApiError::BadRequest(body),
        }
    }
}

impl From<CurriculumCommandError> for ApiError {
    fn from(err: CurriculumCommandError) -> Self {
        let message = err.to_string();
        match err {
            CurriculumCommandError::ProgramNotFound(_) => {
                ApiError::NotFound(ErrorResponse::new("PROGRAM_NOT_FOUND", message))
            }
            CurriculumCommandError::ItemNotFound(_) => {
                ApiError::NotFound(ErrorResponse::new("ITEM_NOT_FOUND", message))
            }
            CurriculumCommandError::InvalidHierarchy(_) => {
                ApiError::BadRequest(ErrorResponse::new("INVALID_HIERARCHY", message))
            }
            CurriculumCommandError::Import(_) => {
                ApiError::BadRequest(ErrorResponse::new("MALFORMED_DOCUMENT", message))
            }
            CurriculumCommandError::Domain(e) => e.into(),
        }
    }
}

impl From<ProgressCommandError> for ApiError {
    fn from(err: ProgressCommandError) -> Self {
        let message = err.to_string();
        match err {
            ProgressCommandError::ProgramNotFound(_) => {
                ApiError::NotFound(ErrorResponse::new("PROGRAM_NOT_FOUND", message))
            }
            ProgressCommandError::EnrollmentNotFound(_) => {
                ApiError::NotFound(ErrorResponse::new("ENROLLMENT_NOT_FOUND", message))
            }
            ProgressCommandError::ItemNotFound(_) => {
                ApiError::NotFound(ErrorResponse::new("ITEM_NOT_FOUND", message))
            }
            ProgressCommandError::ProgressAlreadyExists(_) => {
                ApiError::Conflict(ErrorResponse::new("PROGRESS_EXISTS", message))
            }
            ProgressCommandError::Domain(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            ApiError::BadRequest(body) => (StatusCode::BAD_REQUEST, body),
            ApiError::NotFound(body) => (StatusCode::NOT_FOUND, body),
            ApiError::Conflict(body) => (StatusCode::CONFLICT, body),
            ApiError::Internal(body) => (StatusCode::INTERNAL_SERVER_ERROR, body),
        };

        (status, Json(body)).into_response()
    }
}
