use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Starting salary granted to every newly onboarded internal employee.
pub const BASE_SALARY: u32 = 2500;

/// Tenure beyond this many years no longer increases the suggested bonus.
const BONUS_TENURE_CAP: u32 = 10;

/// Identifier wrapper shared by internal and external employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmployeeId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self)
    }
}

/// Catalog identifier for a training course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub Uuid);

impl CourseId {
    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CourseId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self)
    }
}

/// Catalog entry as resolved by the repository. The domain only ever references these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub is_obligatory: bool,
    /// Set for course objects that were never written to the catalog.
    pub is_new: bool,
}

/// Ordinal classification controlling raise bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum JobLevel {
    Junior,
    Medior,
    Senior,
}

impl JobLevel {
    pub const ENTRY: JobLevel = JobLevel::Junior;
    pub const ALL: [JobLevel; 3] = [JobLevel::Junior, JobLevel::Medior, JobLevel::Senior];

    pub const fn rank(self) -> u8 {
        match self {
            JobLevel::Junior => 1,
            JobLevel::Medior => 2,
            JobLevel::Senior => 3,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.rank() == rank)
    }

    pub const fn label(self) -> &'static str {
        match self {
            JobLevel::Junior => "junior",
            JobLevel::Medior => "medior",
            JobLevel::Senior => "senior",
        }
    }
}

/// Employee on the organization's payroll.
///
/// `salary` and `minimum_raise_given` are only changed through
/// [`EmployeeService::give_raise`](super::EmployeeService::give_raise), and
/// `attended_courses` only grows through [`InternalEmployee::enroll`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalEmployee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub years_in_service: u32,
    pub salary: u32,
    pub job_level: JobLevel,
    pub minimum_raise_given: bool,
    pub attended_courses: Vec<Course>,
}

impl InternalEmployee {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn attends(&self, course_id: &CourseId) -> bool {
        self.attended_courses
            .iter()
            .any(|course| &course.id == course_id)
    }

    /// Append a course, returning `false` when the employee already attends it.
    pub fn enroll(&mut self, course: Course) -> bool {
        if self.attends(&course.id) {
            return false;
        }
        self.attended_courses.push(course);
        true
    }

    /// One percent of the salary per year of service, capped at ten years.
    pub fn suggested_bonus(&self) -> u32 {
        let years = u64::from(self.years_in_service.min(BONUS_TENURE_CAP));
        let bonus = u64::from(self.salary) * years / 100;
        u32::try_from(bonus).unwrap_or(u32::MAX)
    }
}

/// Contractor supplied by another company; outside of payroll and mandatory training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalEmployee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
}

impl ExternalEmployee {
    pub fn new(first_name: &str, last_name: &str, company: &str) -> Result<Self, ValidationError> {
        let (first_name, last_name) = validate_names(first_name, last_name)?;
        let company = company.trim();
        if company.is_empty() {
            return Err(ValidationError::MissingCompany);
        }

        Ok(Self {
            id: EmployeeId::generate(),
            first_name,
            last_name,
            company: company.to_string(),
        })
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Either kind of employee known to the organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Employee {
    Internal(InternalEmployee),
    External(ExternalEmployee),
}

impl Employee {
    pub fn id(&self) -> EmployeeId {
        match self {
            Employee::Internal(employee) => employee.id,
            Employee::External(employee) => employee.id,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Employee::Internal(employee) => employee.display_name(),
            Employee::External(employee) => employee.display_name(),
        }
    }

    pub const fn kind_label(&self) -> &'static str {
        match self {
            Employee::Internal(_) => "internal",
            Employee::External(_) => "external",
        }
    }

    /// Contractors are never eligible for a bonus.
    pub fn suggested_bonus(&self) -> Option<u32> {
        match self {
            Employee::Internal(employee) => Some(employee.suggested_bonus()),
            Employee::External(_) => None,
        }
    }

    pub fn into_internal(self) -> Option<InternalEmployee> {
        match self {
            Employee::Internal(employee) => Some(employee),
            Employee::External(_) => None,
        }
    }
}

/// Malformed creation input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("employee name required ({field} is empty)")]
    MissingName { field: &'static str },
    #[error("external employee company required")]
    MissingCompany,
}

pub(crate) fn validate_names(
    first_name: &str,
    last_name: &str,
) -> Result<(String, String), ValidationError> {
    let first_name = first_name.trim();
    if first_name.is_empty() {
        return Err(ValidationError::MissingName {
            field: "first_name",
        });
    }

    let last_name = last_name.trim();
    if last_name.is_empty() {
        return Err(ValidationError::MissingName { field: "last_name" });
    }

    Ok((first_name.to_string(), last_name.to_string()))
}
