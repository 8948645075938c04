//! End-to-end checks for onboarding internal employees and granting raises.
//!
//! Scenarios go through the public service facade and HTTP router only, using a catalog-backed
//! repository double so the mandatory enrollment rule and raise policy are exercised end to end.

mod common {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use employee_management::employees::catalog::standard_catalog;
    use employee_management::employees::{
        Course, CourseId, EmployeeId, EmployeeRepository, EmployeeService, EmployeeServiceConfig,
        ExternalEmployee, InternalEmployee, RepositoryError,
    };

    #[derive(Default)]
    pub(super) struct CatalogRepository {
        courses: Vec<Course>,
        employees: Mutex<BTreeMap<EmployeeId, InternalEmployee>>,
        staged: Mutex<Vec<InternalEmployee>>,
    }

    impl CatalogRepository {
        pub(super) fn standard() -> Self {
            Self {
                courses: standard_catalog(),
                ..Self::default()
            }
        }

        pub(super) fn staged_count(&self) -> usize {
            self.staged.lock().expect("staging mutex poisoned").len()
        }
    }

    #[async_trait]
    impl EmployeeRepository for CatalogRepository {
        async fn get_course(&self, id: &CourseId) -> Result<Option<Course>, RepositoryError> {
            Ok(self.courses.iter().find(|course| &course.id == id).cloned())
        }

        async fn get_internal_employee(
            &self,
            id: &EmployeeId,
        ) -> Result<Option<InternalEmployee>, RepositoryError> {
            let guard = self.employees.lock().expect("repository mutex poisoned");
            Ok(guard.get(id).cloned())
        }

        async fn get_internal_employees(&self) -> Result<Vec<InternalEmployee>, RepositoryError> {
            let guard = self.employees.lock().expect("repository mutex poisoned");
            Ok(guard.values().cloned().collect())
        }

        async fn get_external_employees(
            &self,
        ) -> Result<Vec<ExternalEmployee>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn add_internal_employee(
            &self,
            employee: InternalEmployee,
        ) -> Result<(), RepositoryError> {
            self.staged
                .lock()
                .expect("staging mutex poisoned")
                .push(employee);
            Ok(())
        }

        async fn update_internal_employee(
            &self,
            employee: InternalEmployee,
        ) -> Result<(), RepositoryError> {
            self.add_internal_employee(employee).await
        }

        async fn save_changes(&self) -> Result<(), RepositoryError> {
            let staged = std::mem::take(&mut *self.staged.lock().expect("staging mutex poisoned"));
            let mut guard = self.employees.lock().expect("repository mutex poisoned");
            for employee in staged {
                guard.insert(employee.id, employee);
            }
            Ok(())
        }

        async fn delete_internal_employee(
            &self,
            id: &EmployeeId,
        ) -> Result<bool, RepositoryError> {
            let mut guard = self.employees.lock().expect("repository mutex poisoned");
            Ok(guard.remove(id).is_some())
        }
    }

    pub(super) fn service() -> (EmployeeService<CatalogRepository>, Arc<CatalogRepository>) {
        let repository = Arc::new(CatalogRepository::standard());
        let service = EmployeeService::new(repository.clone(), EmployeeServiceConfig::default());
        (service, repository)
    }
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use employee_management::employees::catalog::COMPANY_INTRODUCTION;
use employee_management::employees::{
    employee_router, EmployeeServiceError, InternalEmployeeView, RaiseError,
};
use tower::ServiceExt;

#[tokio::test]
async fn onboarding_enrolls_then_persists_on_add() {
    let (service, repository) = common::service();

    let employee = service
        .create_internal_employee("Moudy", "Rasmy")
        .await
        .expect("employee created");
    assert!(employee.attends(&COMPANY_INTRODUCTION));
    assert_eq!(repository.staged_count(), 0);
    assert!(service
        .fetch_internal_employee(&employee.id)
        .await
        .expect("lookup")
        .is_none());

    service
        .add_internal_employee(&employee)
        .await
        .expect("employee saved");

    let stored = service
        .fetch_internal_employee(&employee.id)
        .await
        .expect("lookup")
        .expect("employee stored");
    assert_eq!(stored, employee);
    assert_eq!(repository.staged_count(), 0);
}

#[tokio::test]
async fn rejected_raise_leaves_salary_untouched() {
    let (service, _) = common::service();
    let mut employee = service
        .create_internal_employee("Moudy", "Rasmy")
        .await
        .expect("employee created");

    let err = service
        .give_raise(&mut employee, 33)
        .await
        .expect_err("33 is not a valid raise");

    assert!(matches!(
        err,
        EmployeeServiceError::InvalidRaise(RaiseError::BelowMinimum { attempted: 33, .. })
    ));
    assert_eq!(employee.salary, 2500);
}

#[tokio::test]
async fn http_onboarding_round_trip() {
    let (service, _) = common::service();
    let router = employee_router(Arc::new(service));

    let created = router
        .clone()
        .oneshot(
            Request::post("/employees")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"firstName":"Moudy","lastName":"Rasmy"}"#))
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(created.status(), StatusCode::CREATED);
    let body = axum::body::to_bytes(created.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let view: InternalEmployeeView = serde_json::from_slice(&body).expect("employee view");

    let fetched = router
        .oneshot(
            Request::get(format!("/employees/{}", view.id))
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");
    assert_eq!(fetched.status(), StatusCode::OK);
    let body = axum::body::to_bytes(fetched.into_body(), 64 * 1024)
        .await
        .expect("read body");
    let fetched_view: InternalEmployeeView = serde_json::from_slice(&body).expect("view");
    assert_eq!(fetched_view, view);
}
