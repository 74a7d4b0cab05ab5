//! Directory Client - client side of the employee directory
//!
//! - [`EmployeeProxy`]: one async call per API request
//! - [`controller`]: view state, update function and the runtime driving it
//! - transports behind [`HttpClient`]: [`NetworkHttpClient`] (reqwest) and,
//!   with the `in-process` feature, `OneshotHttpClient` (axum `Router`)

pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod proxy;

pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use controller::{Controller, Msg, ViewState, Ui};
pub use error::{ClientError, ClientResult};
pub use proxy::EmployeeProxy;

// Re-export shared types for convenience
pub use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
pub use shared::response::{ErrorResponse, StatusResponse};
