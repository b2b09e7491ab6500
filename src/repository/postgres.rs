use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::repository::EmployeeRepository;

/// Postgres-backed employee repository over a shared connection pool.
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn save(&self, employee: Employee) -> Result<Employee, AppError> {
        let saved = match employee.id {
            None => {
                sqlx::query_as::<_, Employee>(
                    "INSERT INTO employees (first_name, last_name, email) \
                     VALUES ($1, $2, $3) \
                     RETURNING id, first_name, last_name, email",
                )
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Employee>(
                    "INSERT INTO employees (id, first_name, last_name, email) \
                     VALUES ($1, $2, $3, $4) \
                     ON CONFLICT (id) DO UPDATE SET \
                         first_name = EXCLUDED.first_name, \
                         last_name = EXCLUDED.last_name, \
                         email = EXCLUDED.email \
                     RETURNING id, first_name, last_name, email",
                )
                .bind(id)
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .fetch_one(&self.pool)
                .await?
            }
        };
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, AppError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees \
             WHERE first_name = $1 AND last_name = $2",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
