//! Employee onboarding, mandatory training enrollment, and raise policy.

mod blocking;
pub mod catalog;
pub mod domain;
mod factory;
pub mod raise;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use blocking::BlockingEmployeeService;
pub use domain::{
    Course, CourseId, Employee, EmployeeId, ExternalEmployee, InternalEmployee, JobLevel,
    ValidationError, BASE_SALARY,
};
pub use factory::EmployeeFactory;
pub use raise::{ApprovedRaise, RaiseBounds, RaiseError, RaisePolicy, RaisePolicyConfig};
pub use repository::{
    EmployeeRepository, ExternalEmployeeView, InternalEmployeeView, RepositoryError,
};
pub use router::{employee_router, InternalEmployeeForCreation, RaiseRequest};
pub use service::{EmployeeService, EmployeeServiceConfig, EmployeeServiceError};
