use super::domain::{
    validate_names, Employee, EmployeeId, InternalEmployee, JobLevel, ValidationError,
    BASE_SALARY,
};

/// Builds bare employees for onboarding. Persistence and enrollment are left to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeFactory;

impl EmployeeFactory {
    pub fn new() -> Self {
        Self
    }

    /// Onboarding always yields an internal employee; contractors go through
    /// [`ExternalEmployee::new`](super::domain::ExternalEmployee::new).
    pub fn create_employee(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Employee, ValidationError> {
        self.create_internal_employee(first_name, last_name)
            .map(Employee::Internal)
    }

    pub fn create_internal_employee(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<InternalEmployee, ValidationError> {
        let (first_name, last_name) = validate_names(first_name, last_name)?;

        Ok(InternalEmployee {
            id: EmployeeId::generate(),
            first_name,
            last_name,
            years_in_service: 0,
            salary: BASE_SALARY,
            job_level: JobLevel::ENTRY,
            minimum_raise_given: false,
            attended_courses: Vec::new(),
        })
    }
}
