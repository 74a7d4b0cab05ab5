use std::sync::Arc;
use std::time::Instant;

use crate::core::{Config, Result, StoreBackend};
use crate::db::DbService;
use crate::db::repository::{EmployeeStore, MemoryEmployeeStore, SurrealEmployeeStore};

/// Server state - shared by every handler
///
/// Cheap to clone: the record store sits behind an `Arc`.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration (immutable)
    pub config: Config,
    /// Employee record store
    pub store: Arc<dyn EmployeeStore>,
    /// When this state was built; uptime is measured from here
    pub started_at: Instant,
}

impl ServerState {
    /// Build state around an existing store
    pub fn new(config: Config, store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            config,
            store,
            started_at: Instant::now(),
        }
    }

    /// Open the configured record store
    ///
    /// - `rocksdb`: `work_dir/database/directory.db`, created if missing
    /// - `memory`: empty process-local store
    pub async fn initialize(config: &Config) -> Result<Self> {
        let store: Arc<dyn EmployeeStore> = match config.store_backend {
            StoreBackend::RocksDb => {
                config.ensure_work_dir_structure()?;
                let db_path = config.database_dir().join("directory.db");
                let db_service = DbService::new(&db_path).await?;
                Arc::new(SurrealEmployeeStore::new(db_service.db))
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory record store; data is lost on restart");
                Arc::new(MemoryEmployeeStore::new())
            }
        };

        Ok(Self::new(config.clone(), store))
    }

    /// State over an empty in-memory store
    pub fn in_memory(config: Config) -> Self {
        Self::new(config, Arc::new(MemoryEmployeeStore::new()))
    }
}
