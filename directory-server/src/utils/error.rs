//! Unified error handling
//!
//! Every failure leaves the API as a JSON body:
//!
//! ```json
//! { "error": "<message>", "code": 9002 }
//! ```
//!
//! Record store faults keep their underlying message so callers can see
//! why a write failed.

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use shared::{ErrorCode, ErrorResponse};
use tracing::error;

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Body parsed but a field is missing or has the wrong type (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Body could not be read as JSON (400)
    #[error("Invalid request: {0}")]
    Invalid(String),

    /// Record store fault (500, message exposed)
    #[error("Database error: {0}")]
    Database(String),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation(_) => ErrorCode::ValidationFailed,
            AppError::Invalid(_) => ErrorCode::InvalidRequest,
            AppError::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = match self {
            AppError::Validation(msg) | AppError::Invalid(msg) => msg,
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                msg
            }
        };

        (code.http_status(), Json(ErrorResponse::new(code, message))).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => AppError::Validation(e.body_text()),
            other => AppError::Invalid(other.body_text()),
        }
    }
}

/// `Json` extractor whose rejection is rendered as an [`AppError`] body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_database_error_exposes_message() {
        let response = AppError::Database("Falla DB".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Falla DB");
        assert_eq!(body["code"], 9002);
    }

    #[tokio::test]
    async fn test_rejections_are_bad_request() {
        let response = AppError::Invalid("Expected request with `Content-Type: application/json`".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["code"], 5);
    }

    #[test]
    fn test_repo_errors_map_to_database() {
        let err: AppError = RepoError::Database("connection refused".into()).into();
        assert!(matches!(err, AppError::Database(ref m) if m == "connection refused"));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }
}
