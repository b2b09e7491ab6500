use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::employee::Employee;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryEmployeeRepository;
pub use postgres::PgEmployeeRepository;

/// Storage interface for employee rows. Implementations are injected at
/// process start; the service layer only ever sees this trait.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts a new row when `employee.id` is `None`, otherwise overwrites
    /// the row with that id. Returns the stored entity with its id populated.
    async fn save(&self, employee: Employee) -> Result<Employee, AppError>;

    /// Every row, natural storage order.
    async fn find_all(&self) -> Result<Vec<Employee>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError>;

    /// First row matching both names; order among duplicates is
    /// implementation-defined.
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, AppError>;

    /// Removes the row if present. Deleting an absent id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<(), AppError>;
}
