//! Client configuration

/// Default server root
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default path of the employee resource
pub const DEFAULT_RESOURCE_PATH: &str = "/api/employees";

/// Client configuration for connecting to the directory server
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds; `None` waits for the server indefinitely
    pub timeout: Option<u64>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}
