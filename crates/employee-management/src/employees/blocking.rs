use std::sync::Arc;

use tokio::runtime::{Builder, Runtime};

use super::domain::{EmployeeId, InternalEmployee};
use super::repository::EmployeeRepository;
use super::service::{EmployeeService, EmployeeServiceError};

/// Synchronous facade over [`EmployeeService`] for callers without an async runtime.
///
/// Owns a current-thread runtime, so it must not be used from inside another Tokio runtime.
pub struct BlockingEmployeeService<R> {
    inner: Arc<EmployeeService<R>>,
    runtime: Runtime,
}

impl<R> BlockingEmployeeService<R>
where
    R: EmployeeRepository + 'static,
{
    pub fn new(service: Arc<EmployeeService<R>>) -> Result<Self, EmployeeServiceError> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            inner: service,
            runtime,
        })
    }

    pub fn service(&self) -> &Arc<EmployeeService<R>> {
        &self.inner
    }

    pub fn create_internal_employee(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<InternalEmployee, EmployeeServiceError> {
        self.runtime
            .block_on(self.inner.create_internal_employee(first_name, last_name))
    }

    pub fn add_internal_employee(
        &self,
        employee: &InternalEmployee,
    ) -> Result<(), EmployeeServiceError> {
        self.runtime
            .block_on(self.inner.add_internal_employee(employee))
    }

    pub fn give_raise(
        &self,
        employee: &mut InternalEmployee,
        raise: i64,
    ) -> Result<(), EmployeeServiceError> {
        self.runtime.block_on(self.inner.give_raise(employee, raise))
    }

    pub fn fetch_internal_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<InternalEmployee>, EmployeeServiceError> {
        self.runtime.block_on(self.inner.fetch_internal_employee(id))
    }

    pub fn fetch_internal_employees(&self) -> Result<Vec<InternalEmployee>, EmployeeServiceError> {
        self.runtime.block_on(self.inner.fetch_internal_employees())
    }

    pub fn delete_internal_employee(&self, id: &EmployeeId) -> Result<bool, EmployeeServiceError> {
        self.runtime
            .block_on(self.inner.delete_internal_employee(id))
    }
}
