//! REST API error types
//!
//! Every failure becomes a JSON body `{"error": {"code", "message", "field"?}}`.
//! Server-side failures carry only their error kind code and a generic
//! message; details stay in the log.

use ident_core::{CoreError, ErrorKind};
use ident_service::IdentityError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_MESSAGE: &str = "The request could not be completed";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// Offending input field for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or bad credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Username already taken (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Rejected input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Everything else (500)
    #[error("Internal error ({kind}): {message} {location}")]
    Internal {
        kind: ErrorKind,
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            _ => log::debug!("{}", self),
        }

        let (status, body) = match self {
            ApiError::Unauthorized { message, .. } => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: ErrorKind::Unauthorized.as_str().into(),
                    message,
                    field: None,
                },
            ),
            ApiError::NotFound { message, .. } => (
                StatusCode::NOT_FOUND,
                ApiErrorBody {
                    code: ErrorKind::NotFound.as_str().into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Conflict { message, .. } => (
                StatusCode::CONFLICT,
                ApiErrorBody {
                    code: ErrorKind::Conflict.as_str().into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Internal { kind, message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: kind.as_str().into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Convert identity use-case errors to API errors
impl From<IdentityError> for ApiError {
    #[track_caller]
    fn from(e: IdentityError) -> Self {
        let location = ErrorLocation::from(Location::caller());

        match e {
            IdentityError::Unauthorized { message, .. } => ApiError::Unauthorized { message, location },
            IdentityError::NotFound { message, .. } => ApiError::NotFound { message, location },
            IdentityError::Conflict { message, .. } => ApiError::Conflict { message, location },
            IdentityError::Core(CoreError::Validation { message, field, .. }) => {
                ApiError::Validation {
                    message,
                    field,
                    location,
                }
            }
            IdentityError::Core(CoreError::IllegalTransition { from, to, .. }) => {
                ApiError::Validation {
                    message: format!("cannot move user from {} to {}", from, to),
                    field: None,
                    location,
                }
            }
            other => {
                log::error!("Identity operation failed: {}", other);

                match other.kind() {
                    ErrorKind::Unauthorized => ApiError::Unauthorized {
                        message: "invalid credentials".to_string(),
                        location,
                    },
                    ErrorKind::NotFound => ApiError::NotFound {
                        message: "resource not found".to_string(),
                        location,
                    },
                    ErrorKind::Conflict => ApiError::Conflict {
                        message: "resource already exists".to_string(),
                        location,
                    },
                    ErrorKind::BadRequest => ApiError::Validation {
                        message: "invalid request".to_string(),
                        field: None,
                        location,
                    },
                    kind => ApiError::Internal {
                        kind,
                        message: INTERNAL_MESSAGE.to_string(),
                        location,
                    },
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
