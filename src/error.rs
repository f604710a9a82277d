//! Error handling module
//!
//! Provides the unified error type shared by every handler. All faults,
//! whether a malformed payload or a database failure, surface to the caller
//! as a JSON `{"error": ...}` body.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("{0}")]
    Payload(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            AppError::Connection(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONNECTION_ERROR"),
            AppError::Payload(_) => (StatusCode::INTERNAL_SERVER_ERROR, "PAYLOAD_ERROR"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        }
    }
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        match &self {
            AppError::Database(e) => error!("Database error: {:?}", e),
            AppError::NotFound(_) => {}
            other => error!("{}", other),
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code,
        });

        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Payload(rejection.body_text())
    }
}

/// JSON body extractor whose rejection is reported as an [`AppError`]
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_error_is_server_error() {
        let response = AppError::Payload("missing field `flight_number`".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_status() {
        let response = AppError::NotFound("/nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_connection_message() {
        let err = AppError::Connection("timed out".into());
        assert_eq!(err.to_string(), "Database connection failed: timed out");
        assert_eq!(err.status_and_code().1, "CONNECTION_ERROR");
    }
}
