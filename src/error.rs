//! Error types for the bookstore server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Message returned when registration fields are missing or empty
pub const MISSING_CREDENTIALS: &str = "Must provide username and password";

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("ISBN {key} not found")]
    NotFound { key: String },

    #[error("User {username} already registered")]
    AlreadyRegistered { username: String },

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Catalog load error: {0}")]
    CatalogLoad(String),
}

impl AppError {
    pub fn not_found(key: impl Into<String>) -> Self {
        AppError::NotFound { key: key.into() }
    }

    pub fn missing_credentials() -> Self {
        AppError::Validation(MISSING_CREDENTIALS.to_string())
    }

    /// HTTP status the error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            // Duplicate registration is reported as a bad request, not a conflict
            AppError::AlreadyRegistered { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal(_) | AppError::CatalogLoad(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Message body shared by errors and plain acknowledgements
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::Internal(_) | AppError::CatalogLoad(_) => {
                tracing::error!("{}", self);
                "Internal Server Error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_key() {
        let err = AppError::not_found("999");
        assert_eq!(err.to_string(), "ISBN 999 not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_registration_is_bad_request() {
        let err = AppError::AlreadyRegistered {
            username: "alice".to_string(),
        };
        assert_eq!(err.to_string(), "User alice already registered");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_internal_hides_detail() {
        let response = AppError::Internal("lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Internal Server Error"}));
        assert!(!String::from_utf8_lossy(&bytes).contains("lock poisoned"));
    }
}
