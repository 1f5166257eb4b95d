//! Error types for the exam vault service

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for exam vault operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned to clients when the language model call fails.
pub const AI_FAILURE_MESSAGE: &str = "Failed to get response from AI model.";

/// Exam vault errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing API key, invalid address, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Uploaded file did not declare the PDF media type
    #[error("Only PDF files are allowed.")]
    InvalidMediaType,

    /// Course or exam identifier is unusable as a folder name
    #[error("Invalid {field}: {value:?}")]
    InvalidIdentifier { field: &'static str, value: String },

    /// Malformed request (missing multipart field, unreadable body)
    #[error("{0}")]
    BadRequest(String),

    /// Request body exceeded the configured upload limit
    #[error("{0}")]
    PayloadTooLarge(String),

    /// No records matched a catalog query
    #[error("{0}")]
    NotFound(String),

    /// Record insertion failed after the file was written
    #[error("DB insert failed: {0}")]
    PersistenceFailure(String),

    /// Language model call failed
    #[error("AI service error: {0}")]
    AiService(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request error
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a persistence failure from any underlying cause
    pub fn persistence(cause: impl std::fmt::Display) -> Self {
        Self::PersistenceFailure(cause.to_string())
    }

    /// Create an AI service error
    pub fn ai_service(message: impl Into<String>) -> Self {
        Self::AiService(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidMediaType
            | Error::InvalidIdentifier { .. }
            | Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Config(_)
            | Error::PersistenceFailure(_)
            | Error::AiService(_)
            | Error::Database(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::Http(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to the client
    fn detail(&self) -> String {
        match self {
            // Provider errors are logged where they happen and never leak out.
            Error::AiService(_) => AI_FAILURE_MESSAGE.to_string(),
            Error::Config(_)
            | Error::Database(_)
            | Error::Io(_)
            | Error::Json(_)
            | Error::Http(_)
            | Error::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(json!({ "detail": self.detail() }));

        (status, body).into_response()
    }
}
