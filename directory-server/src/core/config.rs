use std::path::PathBuf;

use crate::core::{Result, ServerError};

/// Which record store backs the employee collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Embedded SurrealDB on RocksDB under `work_dir/database`
    #[default]
    RocksDb,
    /// Process-local map, lost on restart
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rocksdb" | "surreal" | "surrealdb" => Some(Self::RocksDb),
            "memory" | "mem" => Some(Self::Memory),
            _ => None,
        }
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | CLIENT_ORIGIN | http://localhost:4200 | the single origin allowed by CORS |
/// | STORE_BACKEND | rocksdb | `rocksdb` or `memory` |
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | default log filter when `RUST_LOG` is unset |
/// | LOG_JSON | false | emit JSON log lines |
/// | LOG_DIR | (unset) | write daily rolling log files here |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | graceful shutdown window |
///
/// ```ignore
/// HTTP_PORT=8080 STORE_BACKEND=memory cargo run -p directory-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    pub client_origin: String,
    pub store_backend: StoreBackend,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    ///
    /// An unrecognised `STORE_BACKEND` is an error, never a fallback.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from any key/value source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let store_backend = match lookup("STORE_BACKEND") {
            Some(value) => StoreBackend::parse(&value).ok_or_else(|| {
                ServerError::Config(format!(
                    "unknown STORE_BACKEND '{value}', expected 'rocksdb' or 'memory'"
                ))
            })?,
            None => StoreBackend::default(),
        };

        Ok(Self {
            work_dir: lookup("WORK_DIR").unwrap_or_else(|| "./data".into()),
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            client_origin: lookup("CLIENT_ORIGIN")
                .unwrap_or_else(|| "http://localhost:4200".into()),
            store_backend,
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_json: lookup("LOG_JSON")
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: lookup("LOG_DIR").filter(|d| !d.is_empty()),
            shutdown_timeout_ms: lookup("SHUTDOWN_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        })
    }

    /// In-memory configuration, used by tests and local demos
    pub fn in_memory(client_origin: impl Into<String>) -> Self {
        Self {
            work_dir: "./data".into(),
            http_port: 0,
            client_origin: client_origin.into(),
            store_backend: StoreBackend::Memory,
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            shutdown_timeout_ms: 1000,
        }
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// Create `work_dir` and its database directory if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_parse() {
        assert_eq!(StoreBackend::parse("memory"), Some(StoreBackend::Memory));
        assert_eq!(StoreBackend::parse(" RocksDB "), Some(StoreBackend::RocksDb));
        assert_eq!(StoreBackend::parse("mongo"), None);
    }

    #[test]
    fn test_in_memory_config() {
        let config = Config::in_memory("http://localhost:4200");
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.client_origin, "http://localhost:4200");
        assert!(config.database_dir().ends_with("database"));
    }

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.http_port, 3000);
        assert_eq!(config.client_origin, "http://localhost:4200");
        assert_eq!(config.store_backend, StoreBackend::RocksDb);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup(&[
            ("HTTP_PORT", "8080"),
            ("STORE_BACKEND", "memory"),
            ("LOG_JSON", "true"),
        ]))
        .unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert!(config.log_json);
    }

    #[test]
    fn test_unknown_store_backend_is_rejected() {
        let err = Config::from_lookup(lookup(&[("STORE_BACKEND", "mongo")])).unwrap_err();
        assert!(matches!(err, ServerError::Config(ref m) if m.contains("mongo")));
    }
}
