//! Repository Module
//!
//! The record store contract the employee endpoint depends on, plus its
//! SurrealDB and in-memory implementations.

pub mod employee;
pub mod memory;

pub use employee::SurrealEmployeeStore;
pub use memory::MemoryEmployeeStore;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeUpdate, NewEmployee};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee record store
///
/// Absence is never an error here: `find_by_id` returns `None`, and
/// `update_by_id` / `delete_by_id` report whether a record matched.
#[async_trait]
pub trait EmployeeStore: Send + Sync + std::fmt::Debug {
    /// All records, in no particular order
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>>;

    /// Persist a new record; the store assigns its id
    async fn insert(&self, data: NewEmployee) -> RepoResult<Employee>;

    /// Merge the keys present in `patch` into the record; others stay untouched
    async fn update_by_id(&self, id: &str, patch: EmployeeUpdate) -> RepoResult<bool>;

    async fn delete_by_id(&self, id: &str) -> RepoResult<bool>;
}

/// Fresh record key: a simple (hyphenless) UUID v4, never reused
pub(crate) fn new_record_key() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Base repository with database reference
#[derive(Clone, Debug)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
