//! API route modules
//!
//! - [`employees`] - employee CRUD under `/api/employees`
//! - [`health`] - liveness and store checks

pub mod employees;
pub mod health;

pub use crate::utils::AppResult;
