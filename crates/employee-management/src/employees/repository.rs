use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::domain::{Course, CourseId, EmployeeId, ExternalEmployee, InternalEmployee};

/// Storage abstraction the domain core reads from and writes through.
///
/// Writes are two-phase: `add_internal_employee`/`update_internal_employee` stage a
/// change and `save_changes` commits everything staged so far.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn get_course(&self, id: &CourseId) -> Result<Option<Course>, RepositoryError>;

    /// Resolve several courses, keeping the requested order and skipping unknown ids.
    async fn get_courses(&self, ids: &[CourseId]) -> Result<Vec<Course>, RepositoryError> {
        let mut courses = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(course) = self.get_course(id).await? {
                courses.push(course);
            }
        }
        Ok(courses)
    }

    async fn get_internal_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<InternalEmployee>, RepositoryError>;

    async fn get_internal_employees(&self) -> Result<Vec<InternalEmployee>, RepositoryError>;

    async fn get_external_employees(&self) -> Result<Vec<ExternalEmployee>, RepositoryError>;

    async fn add_internal_employee(&self, employee: InternalEmployee)
        -> Result<(), RepositoryError>;

    async fn update_internal_employee(
        &self,
        employee: InternalEmployee,
    ) -> Result<(), RepositoryError>;

    async fn save_changes(&self) -> Result<(), RepositoryError>;

    /// Returns whether exactly one record was removed.
    async fn delete_internal_employee(&self, id: &EmployeeId) -> Result<bool, RepositoryError>;
}

/// Error enumeration for repository failures. The core never interprets these.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Public representation of an internal employee, free of storage details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalEmployeeView {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub salary: u32,
    pub suggested_bonus: u32,
    pub years_in_service: u32,
}

impl From<&InternalEmployee> for InternalEmployeeView {
    fn from(employee: &InternalEmployee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            salary: employee.salary,
            suggested_bonus: employee.suggested_bonus(),
            years_in_service: employee.years_in_service,
        }
    }
}

/// Public representation of a contractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalEmployeeView {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
}

impl From<&ExternalEmployee> for ExternalEmployeeView {
    fn from(employee: &ExternalEmployee) -> Self {
        Self {
            id: employee.id,
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            company: employee.company.clone(),
        }
    }
}
