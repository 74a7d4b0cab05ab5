//! Directory Server - employee directory REST API
//!
//! # Module layout
//!
//! ```text
//! directory-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── db/            # SurrealDB service and record stores
//! ├── api/           # HTTP routes and handlers
//! ├── routes/        # router assembly and tower-http layers
//! ├── middleware/    # request logging
//! └── utils/         # AppError, JSON extractor, logger
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState, StoreBackend};
pub use db::repository::{EmployeeStore, MemoryEmployeeStore, RepoError, RepoResult, SurrealEmployeeStore};
pub use routes::{build_app, build_router};
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger_with_file;

/// Load `.env` and initialize logging from the resulting configuration
///
/// Fails before any logger exists when the configuration is invalid, so
/// the caller must report the error itself.
pub fn setup_environment() -> crate::core::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ___  _             __
   / _ \(_)______ ____/ /____  ______ __
  / // / / __/ -_) __/ __/ _ \/ __/ // /
 /____/_/_/  \__/\__/\__/\___/_/  \_, /
                                 /___/
    "#
    );
}
