use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::repository::EmployeeRepository;

/// In-memory employee repository. Backs the test suites and doubles as a
/// reference implementation of the repository contract; the service layer
/// cannot tell it apart from the Postgres one.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    inner: Mutex<Store>,
}

struct Store {
    rows: BTreeMap<i64, Employee>,
    next_id: i64,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> Result<Employee, AppError> {
        let mut store = self.inner.lock().unwrap();
        let id = match employee.id {
            Some(id) => {
                // Explicit ids move the sequence forward so later inserts
                // never collide with them.
                store.next_id = store.next_id.max(id + 1);
                id
            }
            None => {
                let id = store.next_id;
                store.next_id += 1;
                id
            }
        };
        employee.id = Some(id);
        store.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store.rows.values().find(|e| e.email == email).cloned())
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Employee>, AppError> {
        let store = self.inner.lock().unwrap();
        Ok(store
            .rows
            .values()
            .find(|e| e.first_name == first_name && e.last_name == last_name)
            .cloned())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        let mut store = self.inner.lock().unwrap();
        store.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(first: &str, last: &str, email: &str) -> Employee {
        Employee {
            id: None,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
        }
    }

    #[tokio::test]
    async fn save_assigns_increasing_ids() {
        let repo = InMemoryEmployeeRepository::new();

        let a = repo
            .save(employee("orlando", "cruz", "orlandocruz999@gmail.com"))
            .await
            .unwrap();
        let b = repo
            .save(employee("maria", "sousa", "mariasousa@gmail.com"))
            .await
            .unwrap();

        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_existing_id_overwrites_the_row() {
        let repo = InMemoryEmployeeRepository::new();

        let saved = repo
            .save(employee("orlando", "cruz", "orlandocruz999@gmail.com"))
            .await
            .unwrap();

        let mut replacement = employee("Maria", "Sousa", "mariasousa@gmail.com");
        replacement.id = saved.id;
        repo.save(replacement).await.unwrap();

        let loaded = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(loaded.first_name, "Maria");
        assert_eq!(loaded.email, "mariasousa@gmail.com");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn explicit_id_does_not_break_the_sequence() {
        let repo = InMemoryEmployeeRepository::new();

        let mut seeded = employee("orlando", "cruz", "orlandocruz999@gmail.com");
        seeded.id = Some(7);
        repo.save(seeded).await.unwrap();

        let next = repo
            .save(employee("maria", "sousa", "mariasousa@gmail.com"))
            .await
            .unwrap();
        assert_eq!(next.id, Some(8));
    }

    #[tokio::test]
    async fn find_by_email_and_name() {
        let repo = InMemoryEmployeeRepository::new();
        repo.save(employee("orlando", "cruz", "orlandocruz999@gmail.com"))
            .await
            .unwrap();

        let by_email = repo
            .find_by_email("orlandocruz999@gmail.com")
            .await
            .unwrap();
        assert!(by_email.is_some());
        assert!(repo.find_by_email("nobody@gmail.com").await.unwrap().is_none());

        let by_name = repo.find_by_name("orlando", "cruz").await.unwrap();
        assert_eq!(by_name.unwrap().email, "orlandocruz999@gmail.com");
        assert!(repo.find_by_name("maria", "cruz").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryEmployeeRepository::new();
        let saved = repo
            .save(employee("orlando", "cruz", "orlandocruz999@gmail.com"))
            .await
            .unwrap();
        let id = saved.id.unwrap();

        repo.delete_by_id(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());

        // A second delete of the same id is still a success.
        repo.delete_by_id(id).await.unwrap();
    }
}
