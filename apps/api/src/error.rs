//! # HTTP Errors
//!
//! Every failing request answers with the same JSON body:
//!
//! ```text
//! handler ──► Result<T, ApiError>
//!                  ▲        ▲
//!                  │        └── axum rejections (bad JSON, path, query)
//!                  └── CoreError (from PosService)
//!
//! 404 {"code":"NOT_FOUND","message":"POS with ID 42 does not exist."}
//! ```
//!
//! ## Status Mapping
//! | ErrorCode          | HTTP |
//! |--------------------|------|
//! | `NOT_FOUND`        | 404  |
//! | `INVALID_ARGUMENT` | 400  |
//! | `VALIDATION_ERROR` | 400  |
//! | `CONFLICT`         | 409  |
//! | `UPSTREAM_ERROR`   | 502  |
//! | `DATABASE_ERROR`   | 500  |
//! | `INTERNAL`         | 500  |

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use campus_core::{CoreError, ValidationError};
use serde::{Deserialize, Serialize};

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,

    /// Safe to show to API users; server-side details stay in the logs.
    pub message: String,
}

/// Stable, machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// 404
    NotFound,

    /// Request contradicts itself, e.g. path id vs body id (400)
    InvalidArgument,

    /// Body or parameters fail validation (400)
    ValidationError,

    /// Unique constraint hit (409)
    Conflict,

    /// OpenStreetMap failed (502)
    UpstreamError,

    /// 500, persistence failure
    DatabaseError,

    /// 500, anything unexpected
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidArgument | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::UpstreamError => StatusCode::BAD_GATEWAY,
            ErrorCode::DatabaseError | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let message = message.into();
        ApiError { code, message }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidArgument, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::PosNotFound(_)
            | CoreError::PosNameNotFound(_)
            | CoreError::OsmNodeNotFound(_) => ApiError::new(ErrorCode::NotFound, message),
            CoreError::Validation(_) | CoreError::OsmNodeMissingFields { .. } => {
                ApiError::validation(message)
            }
            CoreError::DuplicatePosName(_) => ApiError::new(ErrorCode::Conflict, message),
            CoreError::OsmUnavailable(e) => {
                tracing::error!("OpenStreetMap request failed: {}", e);
                ApiError::new(ErrorCode::UpstreamError, message)
            }
            CoreError::Persistence(e) => {
                tracing::error!(error = %e, "Persistence failed");
                ApiError::new(ErrorCode::DatabaseError, "The POS store is unavailable.")
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::from(CoreError::from(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
