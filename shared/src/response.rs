//! API Response types
//!
//! Bodies returned by the employee endpoint besides the records themselves.

use crate::error::ErrorCode;
use serde::{Deserialize, Serialize};

/// Acknowledgement returned by update and delete
///
/// ```json
/// { "status": "updated" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub const UPDATED: &'static str = "updated";
    pub const DELETED: &'static str = "deleted";

    pub fn updated() -> Self {
        Self {
            status: Self::UPDATED.to_string(),
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: Self::DELETED.to_string(),
        }
    }
}

/// Error body
///
/// ```json
/// { "error": "connection refused", "code": 9002 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message, carrying the underlying store message on faults
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: Some(code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_bodies() {
        assert_eq!(
            serde_json::to_value(StatusResponse::updated()).unwrap(),
            json!({ "status": "updated" })
        );
        assert_eq!(
            serde_json::to_value(StatusResponse::deleted()).unwrap(),
            json!({ "status": "deleted" })
        );
    }

    #[test]
    fn test_error_body_without_code() {
        let body: ErrorResponse = serde_json::from_value(json!({ "error": "Falla DB" })).unwrap();
        assert_eq!(body.error, "Falla DB");
        assert_eq!(body.code, None);
    }
}
