//! Client module - HTTP transports.
//!
//! [`HttpClient`] abstracts how a request reaches the server so the proxy
//! and controller run unchanged over the network or in-process.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
