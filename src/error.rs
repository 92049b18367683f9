//! API Error Taxonomy
//!
//! Every failure the mock cluster can report is a variant of [`ApiError`].
//! Handlers return `Result<_, ApiError>` and axum renders the error as the
//! structured JSON body real clusters send:
//!
//! ```json
//! {"error": {"type": "mapper_parsing_exception", "reason": "..."}, "status": 400}
//! ```
//!
//! Unknown routes are the one exception and answer `{"error": "not_found"}`.

use axum::Json;
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::mapping::types::ValidationFailure;
use crate::store::types::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A field value does not satisfy its declared mapping type.
    #[error("{0}")]
    MapperParsing(String),

    /// `create` against an id that already holds a document.
    #[error("[{id}]: version conflict, document already exists (current version [{current_version}])")]
    VersionConflict { id: String, current_version: u64 },

    /// A bulk item that names no target index.
    #[error("bulk item has no target index")]
    InvalidIndex,

    /// Request body is not valid JSON.
    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    IllegalArgument(String),

    /// Bulk body whose action/payload framing cannot be followed.
    #[error("malformed bulk request: {0}")]
    MalformedBulk(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("not found")]
    NotFound,
}

/// The `{type, reason}` pair carried by error bodies and failed bulk items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCause {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorCause,
    pub status: u16,
}

impl ApiError {
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::MapperParsing(_) => "mapper_parsing_exception",
            ApiError::VersionConflict { .. } => "version_conflict_engine_exception",
            ApiError::InvalidIndex => "invalid_index",
            ApiError::Parse(_) => "parse_exception",
            ApiError::IllegalArgument(_) => "illegal_argument_exception",
            ApiError::MalformedBulk(_) => "malformed_bulk",
            ApiError::Unauthorized(_) => "security_exception",
            ApiError::NotFound => "not_found",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::VersionConflict { .. } => StatusCode::CONFLICT,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn cause(&self) -> ErrorCause {
        ErrorCause {
            error_type: self.error_type().to_string(),
            reason: Some(self.to_string()),
        }
    }
}

impl From<ValidationFailure> for ApiError {
    fn from(failure: ValidationFailure) -> Self {
        ApiError::MapperParsing(failure.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::VersionConflict {
                id,
                current_version,
            } => ApiError::VersionConflict {
                id,
                current_version,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::NotFound = self {
            return (status, Json(serde_json::json!({ "error": "not_found" }))).into_response();
        }

        tracing::debug!("Request failed with {}: {}", self.error_type(), self);

        let body = ErrorBody {
            error: self.cause(),
            status: status.as_u16(),
        };
        let mut response = (status, Json(body)).into_response();

        if let ApiError::Unauthorized(_) = self {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"es-mock\""),
            );
        }

        response
    }
}
