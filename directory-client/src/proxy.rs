//! Client Data Proxy
//!
//! One method per employee API operation. Each call issues exactly one
//! request and resolves (or fails) once.

use shared::models::Employee;
use shared::response::StatusResponse;
use urlencoding::encode;

use crate::client::HttpClient;
use crate::config::DEFAULT_RESOURCE_PATH;
use crate::ClientResult;

#[derive(Debug, Clone)]
pub struct EmployeeProxy<C> {
    http: C,
    resource_path: String,
}

impl<C: HttpClient> EmployeeProxy<C> {
    /// Proxy for the default `/api/employees` resource
    pub fn new(http: C) -> Self {
        Self::with_resource_path(http, DEFAULT_RESOURCE_PATH)
    }

    pub fn with_resource_path(http: C, resource_path: impl Into<String>) -> Self {
        let path = resource_path.into();
        Self {
            http,
            resource_path: path.trim_end_matches('/').to_string(),
        }
    }

    /// `id` is percent-encoded so it always stays a single path segment
    fn record_path(&self, id: &str) -> String {
        format!("{}/{}", self.resource_path, encode(id))
    }

    /// GET the whole collection
    pub async fn fetch_all(&self) -> ClientResult<Vec<Employee>> {
        self.http.get(&self.resource_path).await
    }

    /// GET one record; `None` when the server answers `null`
    pub async fn fetch_one(&self, id: &str) -> ClientResult<Option<Employee>> {
        self.http.get(&self.record_path(id)).await
    }

    /// POST a record; the returned copy carries the assigned id
    pub async fn create(&self, employee: &Employee) -> ClientResult<Employee> {
        self.http.post(&self.resource_path, employee).await
    }

    /// PUT the record to `/{employee.id}`
    pub async fn update(&self, employee: &Employee) -> ClientResult<StatusResponse> {
        self.http.put(&self.record_path(&employee.id), employee).await
    }

    /// DELETE `/{id}`
    pub async fn delete(&self, id: &str) -> ClientResult<StatusResponse> {
        self.http.delete(&self.record_path(id)).await
    }
}
