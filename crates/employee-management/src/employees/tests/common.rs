use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::employees::catalog::standard_catalog;
use crate::employees::domain::{
    Course, CourseId, EmployeeId, ExternalEmployee, InternalEmployee, JobLevel,
};
use crate::employees::repository::{EmployeeRepository, RepositoryError};
use crate::employees::service::{EmployeeService, EmployeeServiceConfig};
use crate::employees::EmployeeFactory;

#[derive(Default)]
struct MemoryState {
    courses: Vec<Course>,
    internal: Vec<InternalEmployee>,
    external: Vec<ExternalEmployee>,
    pending: Vec<InternalEmployee>,
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    state: Mutex<MemoryState>,
    fail_saves: AtomicBool,
}

impl MemoryRepository {
    pub(super) fn with_catalog() -> Self {
        Self::with_courses(standard_catalog())
    }

    pub(super) fn with_courses(courses: Vec<Course>) -> Self {
        let repository = Self::default();
        repository.state.lock().expect("repository mutex poisoned").courses = courses;
        repository
    }

    pub(super) fn with_external(self, employee: ExternalEmployee) -> Self {
        self.state
            .lock()
            .expect("repository mutex poisoned")
            .external
            .push(employee);
        self
    }

    pub(super) fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    pub(super) fn stored(&self, id: &EmployeeId) -> Option<InternalEmployee> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        guard.internal.iter().find(|employee| &employee.id == id).cloned()
    }

    pub(super) fn stored_count(&self) -> usize {
        self.state
            .lock()
            .expect("repository mutex poisoned")
            .internal
            .len()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryRepository {
    async fn get_course(&self, id: &CourseId) -> Result<Option<Course>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard.courses.iter().find(|course| &course.id == id).cloned())
    }

    async fn get_internal_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<InternalEmployee>, RepositoryError> {
        Ok(self.stored(id))
    }

    async fn get_internal_employees(&self) -> Result<Vec<InternalEmployee>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard.internal.clone())
    }

    async fn get_external_employees(&self) -> Result<Vec<ExternalEmployee>, RepositoryError> {
        let guard = self.state.lock().expect("repository mutex poisoned");
        Ok(guard.external.clone())
    }

    async fn add_internal_employee(
        &self,
        employee: InternalEmployee,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        if guard.internal.iter().any(|stored| stored.id == employee.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.pending.push(employee);
        Ok(())
    }

    async fn update_internal_employee(
        &self,
        employee: InternalEmployee,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        if !guard.internal.iter().any(|stored| stored.id == employee.id) {
            return Err(RepositoryError::NotFound);
        }
        guard.pending.push(employee);
        Ok(())
    }

    async fn save_changes(&self) -> Result<(), RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        let pending = std::mem::take(&mut guard.pending);
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RepositoryError::Unavailable("disk full".to_string()));
        }
        for employee in pending {
            match guard.internal.iter_mut().find(|stored| stored.id == employee.id) {
                Some(stored) => *stored = employee,
                None => guard.internal.push(employee),
            }
        }
        Ok(())
    }

    async fn delete_internal_employee(&self, id: &EmployeeId) -> Result<bool, RepositoryError> {
        let mut guard = self.state.lock().expect("repository mutex poisoned");
        let before = guard.internal.len();
        guard.internal.retain(|employee| &employee.id != id);
        Ok(before - guard.internal.len() == 1)
    }
}

pub(super) struct UnavailableRepository;

#[async_trait]
impl EmployeeRepository for UnavailableRepository {
    async fn get_course(&self, _id: &CourseId) -> Result<Option<Course>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn get_internal_employee(
        &self,
        _id: &EmployeeId,
    ) -> Result<Option<InternalEmployee>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn get_internal_employees(&self) -> Result<Vec<InternalEmployee>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn get_external_employees(&self) -> Result<Vec<ExternalEmployee>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn add_internal_employee(
        &self,
        _employee: InternalEmployee,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn update_internal_employee(
        &self,
        _employee: InternalEmployee,
    ) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn save_changes(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn delete_internal_employee(&self, _id: &EmployeeId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (EmployeeService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::with_catalog());
    let service = EmployeeService::new(repository.clone(), EmployeeServiceConfig::default());
    (service, repository)
}

pub(super) fn fresh_junior() -> InternalEmployee {
    EmployeeFactory::new()
        .create_internal_employee("Moudy", "Rasmy")
        .expect("valid names")
}

pub(super) fn tenured(level: JobLevel, years_in_service: u32, salary: u32) -> InternalEmployee {
    let mut employee = fresh_junior();
    employee.job_level = level;
    employee.years_in_service = years_in_service;
    employee.salary = salary;
    employee
}

pub(super) fn contractor() -> ExternalEmployee {
    ExternalEmployee::new("Amanda", "Smith", "IT for Everyone, Inc").expect("valid contractor")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
