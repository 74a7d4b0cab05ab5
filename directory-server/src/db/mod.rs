//! Database Module
//!
//! Opens the embedded SurrealDB instance backing the employee collection.

pub mod repository;

use std::path::Path;

use repository::{RepoError, RepoResult};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "directory";
const DATABASE: &str = "directory";

/// Database service - owns the SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) a RocksDB-backed database at `path`
    pub async fn new(path: &Path) -> RepoResult<Self> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| RepoError::Database(format!("Failed to open database: {e}")))?;
        tracing::info!(path = %path.display(), "Database opened (SurrealDB/RocksDB)");
        Self::with_db(db).await
    }

    /// Select namespace/database and make sure the employee table exists
    pub async fn with_db(db: Surreal<Db>) -> RepoResult<Self> {
        db.use_ns(NAMESPACE).use_db(DATABASE).await?;
        db.query("DEFINE TABLE IF NOT EXISTS employee SCHEMALESS")
            .await?
            .check()?;
        Ok(Self { db })
    }
}
