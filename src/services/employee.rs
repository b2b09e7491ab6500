use std::sync::Arc;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::repository::EmployeeRepository;

/// Business rules over the employee store: email uniqueness on create and
/// not-found translation on update. Everything else passes straight through
/// to the repository.
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Creates an employee, rejecting the request when another record
    /// already holds the same email.
    pub async fn create_employee(&self, employee: Employee) -> Result<Employee, AppError> {
        if self.repo.find_by_email(&employee.email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Employee already exists with the given email: {}",
                employee.email
            )));
        }
        self.repo.save(employee).await
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.repo.find_all().await
    }

    pub async fn get_employee(&self, id: i64) -> Result<Option<Employee>, AppError> {
        self.repo.find_by_id(id).await
    }

    /// Replaces all fields of an existing employee. The id from the request
    /// path is authoritative; whatever id the body carries is discarded.
    pub async fn update_employee(
        &self,
        id: i64,
        mut employee: Employee,
    ) -> Result<Employee, AppError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Employee not found for the id: {}",
                id
            )));
        }
        employee.id = Some(id);
        self.repo.save(employee).await
    }

    /// Deletes by id without checking existence first; deleting an absent
    /// id succeeds.
    pub async fn delete_employee(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete_by_id(id).await
    }
}
