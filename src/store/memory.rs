use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::{EmployeeStore, StoreError};
use crate::models::employee::Employee;

struct Inner {
    records: HashMap<i32, Employee>,
    next_id: i32,
}

/// Process-local store. A single mutex guards both the records and the id
/// counter, and every operation, reads included, holds it to completion.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore {
            inner: Mutex::new(Inner {
                records: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("employee store lock poisoned".to_string()))
    }

    pub fn create_sync(&self, employee: Employee) -> Result<Employee, StoreError> {
        let mut inner = self.lock()?;
        let id = inner.next_id;
        let stored = employee.with_id(id);
        inner.records.insert(id, stored.clone());
        inner.next_id += 1;
        log::debug!("created employee {}", id);
        Ok(stored)
    }

    pub fn list_sync(&self) -> Result<Vec<Employee>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.records.values().cloned().collect())
    }

    pub fn get_sync(&self, id: i32) -> Result<Employee, StoreError> {
        let inner = self.lock()?;
        inner.records.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    pub fn replace_sync(&self, id: i32, employee: Employee) -> Result<Employee, StoreError> {
        let mut inner = self.lock()?;
        let slot = inner.records.get_mut(&id).ok_or(StoreError::NotFound)?;
        *slot = employee.keep_credentials_from(slot).with_id(id);
        log::debug!("replaced employee {}", id);
        Ok(slot.clone())
    }

    pub fn delete_sync(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.records.remove(&id).ok_or(StoreError::NotFound)?;
        log::debug!("deleted employee {}", id);
        Ok(())
    }

    pub fn find_password_sync(&self, email: &str) -> Result<Option<String>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .records
            .values()
            .find(|e| e.email.as_deref() == Some(email))
            .and_then(|e| e.password.clone()))
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn create(&self, employee: Employee) -> Result<Employee, StoreError> {
        self.create_sync(employee)
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        self.list_sync()
    }

    async fn get(&self, id: i32) -> Result<Employee, StoreError> {
        self.get_sync(id)
    }

    async fn replace(&self, id: i32, employee: Employee) -> Result<Employee, StoreError> {
        self.replace_sync(id, employee)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.delete_sync(id)
    }

    async fn find_password(&self, email: &str) -> Result<Option<String>, StoreError> {
        self.find_password_sync(email)
    }
}
