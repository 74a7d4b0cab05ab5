//! Client error types

use shared::ErrorCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a JSON error body
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Route not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected as invalid
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Map a non-success status and its body to an error
    ///
    /// Bodies shaped `{"error": ...}` become [`ClientError::Api`].
    pub fn from_status(status: http::StatusCode, body: &[u8]) -> Self {
        if let Ok(api_err) = serde_json::from_slice::<shared::ErrorResponse>(body) {
            return ClientError::Api {
                status: status.as_u16(),
                code: api_err.code,
                message: api_err.error,
            };
        }

        let text = String::from_utf8_lossy(body).to_string();
        match status {
            http::StatusCode::NOT_FOUND => ClientError::NotFound(text),
            http::StatusCode::BAD_REQUEST | http::StatusCode::UNPROCESSABLE_ENTITY => {
                ClientError::Validation(text)
            }
            _ => ClientError::Internal(text),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_error_body_becomes_api_error() {
        let err = ClientError::from_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"error":"Falla DB","code":9002}"#,
        );
        match err {
            ClientError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 500);
                assert_eq!(code, Some(ErrorCode::DatabaseError));
                assert_eq!(message, "Falla DB");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_plain_body_falls_back_to_status() {
        let err = ClientError::from_status(StatusCode::NOT_FOUND, b"no route");
        assert!(matches!(err, ClientError::NotFound(ref t) if t == "no route"));

        let err = ClientError::from_status(StatusCode::BAD_GATEWAY, b"upstream down");
        assert!(matches!(err, ClientError::Internal(_)));
    }
}
