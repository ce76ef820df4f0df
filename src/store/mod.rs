use async_trait::async_trait;
use std::fmt;

use crate::models::employee::Employee;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    NotFound,
    Backend(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "Employee not found"),
            StoreError::Backend(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Owner of every employee record. Both backends honour the same contract:
/// ids are assigned on `create`, `replace` keeps the stored id, and
/// `replace`/`delete` on an unknown id fail with `StoreError::NotFound`.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    async fn create(&self, employee: Employee) -> Result<Employee, StoreError>;

    async fn list(&self) -> Result<Vec<Employee>, StoreError>;

    async fn get(&self, id: i32) -> Result<Employee, StoreError>;

    async fn replace(&self, id: i32, employee: Employee) -> Result<Employee, StoreError>;

    async fn delete(&self, id: i32) -> Result<(), StoreError>;

    /// Stored password for `email`, if such an employee exists and has one.
    async fn find_password(&self, email: &str) -> Result<Option<String>, StoreError>;
}
