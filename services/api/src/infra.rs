use async_trait::async_trait;
use employee_management::employees::catalog::{
    catalog_with_obligatory, COMPANY_INTRODUCTION, DEALING_WITH_CUSTOMERS_101,
    OBLIGATORY_COURSES, RESPECTING_YOUR_COLLEAGUES,
};
use employee_management::employees::{
    Course, CourseId, EmployeeId, EmployeeRepository, ExternalEmployee, InternalEmployee,
    JobLevel, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::debug;
use uuid::Uuid;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

enum StagedChange {
    Add(InternalEmployee),
    Update(InternalEmployee),
}

#[derive(Default)]
struct Store {
    courses: Vec<Course>,
    internal: Vec<InternalEmployee>,
    external: Vec<ExternalEmployee>,
    staged: Vec<StagedChange>,
    listing_cache: Option<Vec<InternalEmployee>>,
}

/// Process-local repository. Last writer wins; the employee listing is memoized until the next
/// committed change.
#[derive(Default, Clone)]
pub(crate) struct InMemoryEmployeeRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryEmployeeRepository {
    /// Catalog and staff of a fresh installation.
    pub(crate) fn seeded() -> Self {
        Self::seeded_with(&OBLIGATORY_COURSES)
    }

    /// Seed data whose catalog marks exactly `obligatory_courses` as obligatory.
    pub(crate) fn seeded_with(obligatory_courses: &[CourseId]) -> Self {
        let courses = catalog_with_obligatory(obligatory_courses);
        let attended = |ids: &[CourseId]| -> Vec<Course> {
            courses
                .iter()
                .filter(|course| ids.contains(&course.id))
                .cloned()
                .collect()
        };

        let internal = vec![
            InternalEmployee {
                id: EmployeeId(Uuid::from_u128(0x72f2_f5fe_e50c_4966_8420_d502_58ae_fdcb)),
                first_name: "Megan".to_string(),
                last_name: "Jones".to_string(),
                years_in_service: 2,
                salary: 3000,
                job_level: JobLevel::Medior,
                minimum_raise_given: false,
                attended_courses: attended(&[RESPECTING_YOUR_COLLEAGUES, COMPANY_INTRODUCTION]),
            },
            InternalEmployee {
                id: EmployeeId(Uuid::from_u128(0xf484_ad8f_78fd_46d1_9f87_bbb1_e676_e37f)),
                first_name: "Jaimy".to_string(),
                last_name: "Johnson".to_string(),
                years_in_service: 3,
                salary: 3400,
                job_level: JobLevel::Junior,
                minimum_raise_given: true,
                attended_courses: attended(&[
                    RESPECTING_YOUR_COLLEAGUES,
                    COMPANY_INTRODUCTION,
                    DEALING_WITH_CUSTOMERS_101,
                ]),
            },
        ];

        let external = vec![ExternalEmployee {
            id: EmployeeId(Uuid::from_u128(0x72f2_f5fe_e50c_4966_8420_d502_58ae_fdcb)),
            first_name: "Amanda".to_string(),
            last_name: "Smith".to_string(),
            company: "IT for Everyone, Inc".to_string(),
        }];

        Self {
            store: Arc::new(Mutex::new(Store {
                courses,
                internal,
                external,
                ..Store::default()
            })),
        }
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn get_course(&self, id: &CourseId) -> Result<Option<Course>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard.courses.iter().find(|course| &course.id == id).cloned())
    }

    async fn get_internal_employee(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<InternalEmployee>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard
            .internal
            .iter()
            .find(|employee| &employee.id == id)
            .cloned())
    }

    async fn get_internal_employees(&self) -> Result<Vec<InternalEmployee>, RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        if let Some(cached) = &guard.listing_cache {
            debug!(count = cached.len(), "serving internal employees from cache");
            return Ok(cached.clone());
        }
        let listing = guard.internal.clone();
        guard.listing_cache = Some(listing.clone());
        Ok(listing)
    }

    async fn get_external_employees(&self) -> Result<Vec<ExternalEmployee>, RepositoryError> {
        let guard = self.store.lock().expect("repository mutex poisoned");
        Ok(guard.external.clone())
    }

    async fn add_internal_employee(
        &self,
        employee: InternalEmployee,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        guard.staged.push(StagedChange::Add(employee));
        Ok(())
    }

    async fn update_internal_employee(
        &self,
        employee: InternalEmployee,
    ) -> Result<(), RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        guard.staged.push(StagedChange::Update(employee));
        Ok(())
    }

    /// Applies every staged change or none of them.
    async fn save_changes(&self) -> Result<(), RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        let staged = std::mem::take(&mut guard.staged);
        if staged.is_empty() {
            return Ok(());
        }

        let mut internal = guard.internal.clone();
        for change in staged {
            match change {
                StagedChange::Add(employee) => {
                    if internal.iter().any(|stored| stored.id == employee.id) {
                        return Err(RepositoryError::Conflict);
                    }
                    internal.push(employee);
                }
                StagedChange::Update(employee) => {
                    let stored = internal
                        .iter_mut()
                        .find(|stored| stored.id == employee.id)
                        .ok_or(RepositoryError::NotFound)?;
                    *stored = employee;
                }
            }
        }

        guard.internal = internal;
        guard.listing_cache = None;
        Ok(())
    }

    async fn delete_internal_employee(&self, id: &EmployeeId) -> Result<bool, RepositoryError> {
        let mut guard = self.store.lock().expect("repository mutex poisoned");
        let before = guard.internal.len();
        guard.internal.retain(|employee| &employee.id != id);
        let removed = before - guard.internal.len();
        if removed > 0 {
            guard.listing_cache = None;
        }
        Ok(removed == 1)
    }
}
