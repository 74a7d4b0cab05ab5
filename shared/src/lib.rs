//! Shared types for the staff directory
//!
//! Wire types exchanged between `directory-server` and `directory-client`:
//! the employee record, create/update payloads, status and error bodies.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use error::{ErrorCode, InvalidErrorCode};
pub use models::{Employee, EmployeeCreate, EmployeeUpdate, NewEmployee};
pub use response::{ErrorResponse, StatusResponse};
pub use serde::{Deserialize, Serialize};
