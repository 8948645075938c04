use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::catalog::OBLIGATORY_COURSES;
use super::domain::{CourseId, EmployeeId, ExternalEmployee, InternalEmployee, ValidationError};
use super::factory::EmployeeFactory;
use super::raise::{RaiseError, RaisePolicy, RaisePolicyConfig};
use super::repository::{EmployeeRepository, RepositoryError};

/// Onboarding and compensation rules applied by [`EmployeeService`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeServiceConfig {
    pub obligatory_courses: Vec<CourseId>,
    pub raise_policy: RaisePolicyConfig,
}

impl Default for EmployeeServiceConfig {
    fn default() -> Self {
        Self {
            obligatory_courses: OBLIGATORY_COURSES.to_vec(),
            raise_policy: RaisePolicyConfig::default(),
        }
    }
}

/// Service composing the factory, the mandatory enrollment rule, the raise policy, and the
/// repository collaborator.
pub struct EmployeeService<R> {
    repository: Arc<R>,
    factory: EmployeeFactory,
    policy: RaisePolicy,
    obligatory_courses: Vec<CourseId>,
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EmployeeServiceConfig) -> Self {
        Self::with_factory(repository, EmployeeFactory::new(), config)
    }

    pub fn with_factory(
        repository: Arc<R>,
        factory: EmployeeFactory,
        config: EmployeeServiceConfig,
    ) -> Self {
        let EmployeeServiceConfig {
            mut obligatory_courses,
            raise_policy,
        } = config;

        let mut seen = HashSet::new();
        obligatory_courses.retain(|id| seen.insert(*id));

        Self {
            repository,
            factory,
            policy: RaisePolicy::new(raise_policy),
            obligatory_courses,
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn policy(&self) -> &RaisePolicy {
        &self.policy
    }

    /// Build a new internal employee enrolled in every obligatory catalog course.
    ///
    /// The employee is not persisted; pass it to [`Self::add_internal_employee`] for that.
    pub async fn create_internal_employee(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<InternalEmployee, EmployeeServiceError> {
        let mut employee = self
            .factory
            .create_internal_employee(first_name, last_name)?;

        let courses = self
            .repository
            .get_courses(&self.obligatory_courses)
            .await?;
        if courses.len() < self.obligatory_courses.len() {
            warn!(
                configured = self.obligatory_courses.len(),
                resolved = courses.len(),
                "obligatory courses missing from the catalog"
            );
        }

        for course in courses {
            if !course.is_obligatory || course.is_new {
                warn!(
                    course_id = %course.id,
                    is_obligatory = course.is_obligatory,
                    is_new = course.is_new,
                    "skipping course that is not an obligatory catalog entry"
                );
                continue;
            }
            employee.enroll(course);
        }

        debug!(
            employee_id = %employee.id,
            courses = employee.attended_courses.len(),
            "internal employee created"
        );
        Ok(employee)
    }

    /// Stage the employee and commit it.
    pub async fn add_internal_employee(
        &self,
        employee: &InternalEmployee,
    ) -> Result<(), EmployeeServiceError> {
        self.repository
            .add_internal_employee(employee.clone())
            .await?;
        self.repository.save_changes().await?;

        info!(employee_id = %employee.id, "internal employee added");
        Ok(())
    }

    /// Validate and apply a raise. `employee` is only updated once the change is saved.
    ///
    /// The employee must already be stored through [`Self::add_internal_employee`]; a raise
    /// for an employee that was only created fails with [`RepositoryError::NotFound`] and
    /// leaves it untouched.
    pub async fn give_raise(
        &self,
        employee: &mut InternalEmployee,
        raise: i64,
    ) -> Result<(), EmployeeServiceError> {
        let approved = match self.policy.approve(employee, raise) {
            Ok(approved) => approved,
            Err(error) => {
                warn!(employee_id = %employee.id, raise, %error, "raise rejected");
                return Err(error.into());
            }
        };

        let mut raised = employee.clone();
        raised.salary = raised.salary.saturating_add(approved.amount);
        if approved.is_minimum {
            raised.minimum_raise_given = true;
        }

        self.repository
            .update_internal_employee(raised.clone())
            .await?;
        self.repository.save_changes().await?;

        info!(
            employee_id = %raised.id,
            raise = approved.amount,
            salary = raised.salary,
            "raise granted"
        );
        *employee = raised;
        Ok(())
    }

    /// Look an employee up and raise them. `Ok(None)` when the id is unknown.
    pub async fn give_raise_by_id(
        &self,
        id: &EmployeeId,
        raise: i64,
    ) -> Result<Option<InternalEmployee>, EmployeeServiceError> {
        let Some(mut employee) = self.repository.get_internal_employee(id).await? else {
            return Ok(None);
        };
        self.give_raise(&mut employee, raise).await?;
        Ok(Some(employee))
    }

    pub async fn fetch_internal_employees(
        &self,
    ) -> Result<Vec<InternalEmployee>, EmployeeServiceError> {
        Ok(self.repository.get_internal_employees().await?)
    }

    pub async fn fetch_internal_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<InternalEmployee>, EmployeeServiceError> {
        Ok(self.repository.get_internal_employee(id).await?)
    }

    pub async fn fetch_external_employees(
        &self,
    ) -> Result<Vec<ExternalEmployee>, EmployeeServiceError> {
        Ok(self.repository.get_external_employees().await?)
    }

    /// `Ok(false)` when no employee with `id` exists.
    pub async fn delete_internal_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<bool, EmployeeServiceError> {
        let removed = self.repository.delete_internal_employee(id).await?;
        if removed {
            info!(employee_id = %id, "internal employee deleted");
        } else {
            debug!(employee_id = %id, "no internal employee to delete");
        }
        Ok(removed)
    }
}

/// Error raised by the employee service.
#[derive(Debug, thiserror::Error)]
pub enum EmployeeServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidRaise(#[from] RaiseError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("blocking runtime unavailable: {0}")]
    Runtime(#[from] std::io::Error),
}
