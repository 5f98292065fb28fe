//! Error handling module for the forum backend.
//!
//! Provides centralized error types with mapping to HTTP status codes and the
//! `{status, message}` response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Message returned for every empty result set, whatever the collection.
pub const NO_DOCUMENTS_FOUND: &str = "No topics found";

/// Message returned for every internal failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Query matched no documents
    NotFound(String),
    /// Request body could not be decoded
    BadRequest(String),
    /// Request body decoded but failed validation
    Validation(String),
    /// Store error, including an unavailable connection
    Database(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        }
    }

    /// Message safe to hand to the client. Internal causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(_) | AppError::Internal(_) => INTERNAL_SERVER_ERROR.to_string(),
            _ => self.message(),
        }
    }

    /// Shorthand for the empty-result error.
    pub fn no_documents() -> Self {
        AppError::NotFound(NO_DOCUMENTS_FOUND.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status_code().as_u16(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {:?}", err);
        AppError::Database(format!("Database error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::BadRequest(format!("JSON error: {}", err))
    }
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &AppError) -> Self {
        Self {
            status: error.status_code().as_u16(),
            message: error.public_message(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = ErrorResponse::new(&self);
        (status, Json(body)).into_response()
    }
}
