//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use sb_core::{CoreError, FieldErrors};

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field details
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// First offending field for a validation error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Every offending field with its message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Contact form failed validation (400)
    #[error("Validation failed: {fields} {location}")]
    Validation {
        fields: FieldErrors,
        location: ErrorLocation,
    },

    /// Email service refused or could not be reached (502)
    #[error("Delivery failed: {message} {location}")]
    Delivery {
        message: String,
        location: ErrorLocation,
    },

    /// The same contact message is still being delivered (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Visitor mistakes are routine; only server-side trouble is an error
        match &self {
            ApiError::Delivery { .. } | ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::debug!("{}", self),
        }

        let (status, body) = match self {
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: "NOT_FOUND".into(),
                    message,
                    field: None,
                    fields: None,
                },
            ),
            ApiError::Validation { fields, .. } => {
                let (field, message) = fields
                    .first()
                    .map(|(f, m)| (Some(f.as_str().to_string()), m.to_string()))
                    .unwrap_or((None, "Invalid input".to_string()));
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorBody {
                        code: "VALIDATION_ERROR".into(),
                        message,
                        field,
                        fields: Some(fields),
                    },
                )
            }
            ApiError::Delivery { message, .. } => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "DELIVERY_FAILED".into(),
                    message,
                    field: None,
                    fields: None,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: "SUBMISSION_IN_PROGRESS".into(),
                    message,
                    field: None,
                    fields: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                    fields: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                    fields: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert content errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidCategory { value, .. } => ApiError::BadRequest {
                message: format!("Unknown project category '{}'", value),
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidProjectType { value, .. } => ApiError::BadRequest {
                message: format!("Unknown project type '{}'", value),
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Internal {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
