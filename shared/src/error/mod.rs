//! Error codes shared by server and client
//!
//! - 0xxx: General errors
//! - 9xxx: System errors
//!
//! ```
//! use shared::error::ErrorCode;
//!
//! assert_eq!(ErrorCode::DatabaseError.code(), 9002);
//! assert_eq!(ErrorCode::DatabaseError.http_status().as_u16(), 500);
//! ```

mod codes;
mod http;

pub use codes::{ErrorCode, InvalidErrorCode};
