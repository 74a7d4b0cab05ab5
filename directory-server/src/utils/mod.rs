//! Utilities - application error type, JSON extractor, logging

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, JsonBody};
pub use result::AppResult;
