use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::Mutex;

use super::{EmployeeStore, StoreError};
use crate::models::employee::{Employee, EmployeeRow};

const SELECT_COLUMNS: &str =
    "SELECT id, name, gender, hire_year, address, department, others, image, email, password FROM employee";

/// Store backed by the `employee` table.
///
/// Only `create` and `list` take the in-process lock; `get`, `replace` and
/// `delete` go straight to the pool and rely on the database alone.
pub struct PgStore {
    pool: PgPool,
    lock: Mutex<()>,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore {
            pool,
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl EmployeeStore for PgStore {
    async fn create(&self, employee: Employee) -> Result<Employee, StoreError> {
        let _guard = self.lock.lock().await;

        let id: i32 = sqlx::query_scalar(
            "INSERT INTO employee (name, gender, hire_year, address, department, others, image, email, password)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING id",
        )
        .bind(&employee.name)
        .bind(&employee.gender)
        .bind(employee.hire_year)
        .bind(&employee.address)
        .bind(&employee.department)
        .bind(&employee.others)
        .bind(&employee.image)
        .bind(&employee.email)
        .bind(&employee.password)
        .fetch_one(&self.pool)
        .await?;

        log::debug!("inserted employee {}", id);
        Ok(employee.with_id(id))
    }

    async fn list(&self) -> Result<Vec<Employee>, StoreError> {
        let _guard = self.lock.lock().await;

        let rows = sqlx::query_as::<_, EmployeeRow>(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn get(&self, id: i32) -> Result<Employee, StoreError> {
        let row = sqlx::query_as::<_, EmployeeRow>(&format!("{} WHERE id = $1", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Employee::from).ok_or(StoreError::NotFound)
    }

    async fn replace(&self, id: i32, employee: Employee) -> Result<Employee, StoreError> {
        // Absent credentials keep the stored values.
        let row = sqlx::query_as::<_, EmployeeRow>(
            "UPDATE employee
             SET name = $1, gender = $2, hire_year = $3, address = $4, department = $5,
                 others = $6, image = $7, email = COALESCE($8, email), password = COALESCE($9, password)
             WHERE id = $10
             RETURNING id, name, gender, hire_year, address, department, others, image, email, password",
        )
        .bind(&employee.name)
        .bind(&employee.gender)
        .bind(employee.hire_year)
        .bind(&employee.address)
        .bind(&employee.department)
        .bind(&employee.others)
        .bind(&employee.image)
        .bind(&employee.email)
        .bind(&employee.password)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let updated = row.map(Employee::from).ok_or(StoreError::NotFound)?;
        log::debug!("updated employee {}", id);
        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        log::debug!("deleted employee {}", id);
        Ok(())
    }

    async fn find_password(&self, email: &str) -> Result<Option<String>, StoreError> {
        let password: Option<Option<String>> =
            sqlx::query_scalar("SELECT password FROM employee WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?;

        Ok(password.flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Needs a reachable database with the `employee` table:
    // DATABASE_URL=postgres://... cargo test -- --ignored
    #[actix_web::test]
    #[ignore]
    async fn round_trips_against_postgres() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = PgPool::connect(&url).await.unwrap();
        let store = PgStore::new(pool);

        let created = store
            .create(Employee {
                name: "Postgres Test".into(),
                image: vec![0xde, 0xad],
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(created.id >= 1);
        assert_eq!(store.get(created.id).await.unwrap(), created);

        let replaced = store
            .replace(created.id, Employee { name: "Renamed".into(), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(store.get(created.id).await.unwrap(), replaced);

        store.delete(created.id).await.unwrap();
        assert_eq!(store.get(created.id).await, Err(StoreError::NotFound));
        assert_eq!(store.delete(created.id).await, Err(StoreError::NotFound));
    }
}
