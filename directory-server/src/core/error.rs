use thiserror::Error;

use crate::db::repository::RepoError;

/// Errors that stop the server from starting or serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Record store error: {0}")]
    Store(#[from] RepoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server startup
pub type Result<T> = std::result::Result<T, ServerError>;
