//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use noteful_core::{ValidationError, ValidationKind};
use noteful_store::StoreError;
use serde::Serialize;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request input failed validation (400 or 422).
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Bad request (400).
    #[error("{0}")]
    BadRequest(String),

    /// A request the framework refused before a handler ran, with its own status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    /// Not found (404).
    #[error("Not Found")]
    NotFound,

    /// Unauthorized (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Internal server error (500).
    #[error("internal error: {0}")]
    Internal(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => "BAD_REQUEST",
            StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE_ENTITY",
            StatusCode::NOT_FOUND => "NOT_FOUND",
            StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
            StatusCode::PAYLOAD_TOO_LARGE => "PAYLOAD_TOO_LARGE",
            StatusCode::UNSUPPORTED_MEDIA_TYPE => "UNSUPPORTED_MEDIA_TYPE",
            s if s.is_client_error() => "BAD_REQUEST",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(e) => match e.kind {
                ValidationKind::BadRequest => StatusCode::BAD_REQUEST,
                ValidationKind::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) => match e {
                StoreError::UserNotFound(_)
                | StoreError::FolderNotFound(_)
                | StoreError::NoteNotFound(_)
                | StoreError::TagNotFound(_) => StatusCode::NOT_FOUND,
                StoreError::DuplicateUsername(_)
                | StoreError::DuplicateFolderName(_)
                | StoreError::DuplicateTagName(_)
                | StoreError::InvalidFolder(_)
                | StoreError::InvalidTag(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    /// Message shown to the client. Internal details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            Self::Validation(e) => e.message.clone(),
            Self::BadRequest(msg) | Self::Unauthorized(msg) => msg.clone(),
            Self::Rejected { message, .. } => message.clone(),
            Self::NotFound => "Not Found".to_string(),
            Self::Internal(_) => "Internal Server Error".to_string(),
            Self::Store(e) => match e {
                StoreError::UserNotFound(_)
                | StoreError::FolderNotFound(_)
                | StoreError::NoteNotFound(_)
                | StoreError::TagNotFound(_) => "Not Found".to_string(),
                StoreError::DuplicateUsername(_) => "The username already exists".to_string(),
                StoreError::DuplicateFolderName(_) => {
                    "The folder name already exists".to_string()
                }
                StoreError::DuplicateTagName(_) => "The tag name already exists".to_string(),
                StoreError::InvalidFolder(_) => "The `folderId` is not valid".to_string(),
                StoreError::InvalidTag(_) => {
                    "The `tags` array contains an invalid `id`".to_string()
                }
                _ => "Internal Server Error".to_string(),
            },
        }
    }

    fn reason(&self) -> Option<&'static str> {
        match self {
            Self::Validation(e) => Some(e.reason()),
            Self::Store(StoreError::DuplicateUsername(_)) => Some("ValidationError"),
            _ => None,
        }
    }

    fn location(&self) -> Option<String> {
        match self {
            Self::Validation(e) => e.location.clone(),
            Self::Store(e) => match e {
                StoreError::DuplicateUsername(_) => Some("username".to_string()),
                StoreError::DuplicateFolderName(_) | StoreError::DuplicateTagName(_) => {
                    Some("name".to_string())
                }
                StoreError::InvalidFolder(_) => Some("folderId".to_string()),
                StoreError::InvalidTag(_) => Some("tags".to_string()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "BAD_REQUEST").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Error category, set for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// The request field that caused the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: ErrorDetails {
                code: self.code().to_string(),
                message: self.public_message(),
                reason: self.reason().map(str::to_string),
                location: self.location(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
