//! In-memory employee store

use super::{EmployeeStore, RepoResult, new_record_key};
use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{Employee, EmployeeUpdate, NewEmployee};
use std::sync::Arc;

/// `DashMap`-backed store for development and tests
#[derive(Clone, Debug, Default)]
pub struct MemoryEmployeeStore {
    records: Arc<DashMap<String, Employee>>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Ok(self.records.iter().map(|r| r.value().clone()).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        Ok(self.records.get(id).map(|r| r.value().clone()))
    }

    async fn insert(&self, data: NewEmployee) -> RepoResult<Employee> {
        let employee = Employee::from_new(new_record_key(), data);
        self.records.insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    async fn update_by_id(&self, id: &str, patch: EmployeeUpdate) -> RepoResult<bool> {
        match self.records.get_mut(id) {
            Some(mut record) => {
                patch.apply_to(record.value_mut());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_id(&self, id: &str) -> RepoResult<bool> {
        Ok(self.records.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ana() -> NewEmployee {
        NewEmployee {
            name: "Ana".into(),
            position: "Dev".into(),
            office: "HQ".into(),
            salary: 1000.0,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_fresh_ids() {
        let store = MemoryEmployeeStore::new();
        let a = store.insert(ana()).await.unwrap();
        let b = store.insert(ana()).await.unwrap();

        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id(&a.id).await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn test_update_merges_present_keys_only() {
        let store = MemoryEmployeeStore::new();
        let created = store.insert(ana()).await.unwrap();

        let patch = EmployeeUpdate {
            office: Some("Remote".into()),
            ..Default::default()
        };
        assert!(store.update_by_id(&created.id, patch).await.unwrap());

        let stored = store.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(stored.office, "Remote");
        assert_eq!(stored.name, "Ana");
        assert_eq!(stored.salary, 1000.0);
    }

    #[tokio::test]
    async fn test_missing_records_are_not_errors() {
        let store = MemoryEmployeeStore::new();
        assert!(store.find_all().await.unwrap().is_empty());
        assert_eq!(store.find_by_id("nope").await.unwrap(), None);
        assert!(!store.update_by_id("nope", EmployeeUpdate::default()).await.unwrap());
        assert!(!store.delete_by_id("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let store = MemoryEmployeeStore::new();
        let created = store.insert(ana()).await.unwrap();

        assert!(store.delete_by_id(&created.id).await.unwrap());
        assert_eq!(store.find_by_id(&created.id).await.unwrap(), None);
        assert!(store.is_empty());
    }
}
