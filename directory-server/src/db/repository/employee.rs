//! Employee Repository (SurrealDB)

use super::{BaseRepository, EmployeeStore, RepoError, RepoResult, new_record_key};
use async_trait::async_trait;
use serde::Deserialize;
use shared::models::{Employee, EmployeeUpdate, NewEmployee};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "employee";

// Ids leave the store as plain keys, never as `table:key` record ids
const SELECT_FIELDS: &str = "record::id(id) AS id, name, position, office, salary";

/// Placeholder row used to count records touched by UPDATE/DELETE
#[derive(Deserialize)]
struct Touched {}

#[derive(Clone, Debug)]
pub struct SurrealEmployeeStore {
    base: BaseRepository,
}

impl SurrealEmployeeStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl EmployeeStore for SurrealEmployeeStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query(format!("SELECT {SELECT_FIELDS} FROM type::table($table)"))
            .bind(("table", TABLE))
            .await?
            .take(0)?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query(format!(
                "SELECT {SELECT_FIELDS} FROM type::thing($table, $key)"
            ))
            .bind(("table", TABLE))
            .bind(("key", id.to_string()))
            .await?
            .take(0)?;
        Ok(employees.into_iter().next())
    }

    async fn insert(&self, data: NewEmployee) -> RepoResult<Employee> {
        let key = new_record_key();

        let mut result = self
            .base
            .db()
            .query("CREATE type::thing($table, $key) CONTENT $data RETURN AFTER")
            .bind(("table", TABLE))
            .bind(("key", key.clone()))
            .bind(("data", data.clone()))
            .await?;

        let created: Vec<Touched> = result.take(0)?;
        if created.is_empty() {
            return Err(RepoError::Database("Failed to create employee".to_string()));
        }
        Ok(Employee::from_new(key, data))
    }

    async fn update_by_id(&self, id: &str, patch: EmployeeUpdate) -> RepoResult<bool> {
        // UPDATE never creates a missing record
        let mut result = self
            .base
            .db()
            .query("UPDATE type::thing($table, $key) MERGE $patch RETURN AFTER")
            .bind(("table", TABLE))
            .bind(("key", id.to_string()))
            .bind(("patch", patch))
            .await?;

        let updated: Vec<Touched> = result.take(0)?;
        Ok(!updated.is_empty())
    }

    async fn delete_by_id(&self, id: &str) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("DELETE type::thing($table, $key) RETURN BEFORE")
            .bind(("table", TABLE))
            .bind(("key", id.to_string()))
            .await?;

        let deleted: Vec<Touched> = result.take(0)?;
        Ok(!deleted.is_empty())
    }
}
