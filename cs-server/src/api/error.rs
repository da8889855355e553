//! Webhook endpoint error types
//!
//! Status codes follow the contract with the event source: 400 means "do not
//! retry this body", 500 means "server-side fault, retry later". These errors
//! produce consistent JSON bodies.

use cs_db::DbError;

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

/// Inner error body with code and message
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "MISSING_HEADERS", "BAD_REQUEST")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required signature headers absent (400)
    #[error("Missing signature headers: {message} {location}")]
    MissingHeaders {
        message: String,
        location: ErrorLocation,
    },

    /// Signature verification failed or payload malformed (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Signing secret not configured (500)
    #[error("Server misconfigured: {message} {location}")]
    Misconfigured {
        message: String,
        location: ErrorLocation,
    },

    /// Store operation failed (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log with location for debugging
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::MissingHeaders { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "MISSING_HEADERS".into(),
                    message,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                },
            ),
            ApiError::Misconfigured { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "MISCONFIGURED".into(),
                    message,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Signature verification failures are client faults: the request cannot be
/// trusted, so the source must not retry the same body.
impl From<cs_webhook::VerifyError> for ApiError {
    #[track_caller]
    fn from(e: cs_webhook::VerifyError) -> Self {
        ApiError::BadRequest {
            message: format!("Webhook verification failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Store faults map to 500 so the event source retries later
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to the event source
        log::error!("Database error: {}", e);
        ApiError::Internal {
            message: "Store operation failed".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// A verified payload that still fails model validation is a client fault
impl From<cs_core::CoreError> for ApiError {
    #[track_caller]
    fn from(e: cs_core::CoreError) -> Self {
        ApiError::BadRequest {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
