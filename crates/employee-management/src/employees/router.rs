use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use super::domain::EmployeeId;
use super::repository::{
    EmployeeRepository, ExternalEmployeeView, InternalEmployeeView, RepositoryError,
};
use super::service::{EmployeeService, EmployeeServiceError};

/// Creation payload accepted by `POST /employees`. Missing names fail validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InternalEmployeeForCreation {
    pub first_name: String,
    pub last_name: String,
}

/// Payload accepted by `POST /employees/:employee_id/raise`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RaiseRequest {
    pub raise: i64,
}

/// Router builder exposing HTTP endpoints for employee onboarding and raises.
pub fn employee_router<R>(service: Arc<EmployeeService<R>>) -> Router
where
    R: EmployeeRepository + 'static,
{
    Router::new()
        .route(
            "/employees",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route(
            "/employees/:employee_id",
            get(get_handler::<R>).delete(delete_handler::<R>),
        )
        .route("/employees/:employee_id/raise", post(raise_handler::<R>))
        .route("/externalemployees", get(external_list_handler::<R>))
        .with_state(service)
}

pub(crate) async fn list_handler<R>(State(service): State<Arc<EmployeeService<R>>>) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.fetch_internal_employees().await {
        Ok(employees) => {
            info!(count = employees.len(), "retrieved internal employees");
            let views: Vec<InternalEmployeeView> =
                employees.iter().map(InternalEmployeeView::from).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
    Path(employee_id): Path<String>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    let Some(id) = parse_employee_id(&employee_id) else {
        return invalid_id_response(&employee_id);
    };

    match service.fetch_internal_employee(&id).await {
        Ok(Some(employee)) => {
            (StatusCode::OK, Json(InternalEmployeeView::from(&employee))).into_response()
        }
        Ok(None) => not_found_response(&id),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
    Json(payload): Json<InternalEmployeeForCreation>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    let employee = match service
        .create_internal_employee(&payload.first_name, &payload.last_name)
        .await
    {
        Ok(employee) => employee,
        Err(err) => return error_response(err),
    };

    if let Err(err) = service.add_internal_employee(&employee).await {
        return error_response(err);
    }

    let location = format!("/employees/{}", employee.id);
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(InternalEmployeeView::from(&employee)),
    )
        .into_response()
}

pub(crate) async fn raise_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
    Path(employee_id): Path<String>,
    Json(request): Json<RaiseRequest>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    let Some(id) = parse_employee_id(&employee_id) else {
        return invalid_id_response(&employee_id);
    };

    match service.give_raise_by_id(&id, request.raise).await {
        Ok(Some(employee)) => {
            (StatusCode::OK, Json(InternalEmployeeView::from(&employee))).into_response()
        }
        Ok(None) => not_found_response(&id),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
    Path(employee_id): Path<String>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    let Some(id) = parse_employee_id(&employee_id) else {
        return invalid_id_response(&employee_id);
    };

    match service.delete_internal_employee(&id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => not_found_response(&id),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn external_list_handler<R>(
    State(service): State<Arc<EmployeeService<R>>>,
) -> Response
where
    R: EmployeeRepository + 'static,
{
    match service.fetch_external_employees().await {
        Ok(employees) => {
            let views: Vec<ExternalEmployeeView> =
                employees.iter().map(ExternalEmployeeView::from).collect();
            (StatusCode::OK, Json(views)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn parse_employee_id(raw: &str) -> Option<EmployeeId> {
    raw.parse().ok()
}

fn invalid_id_response(raw: &str) -> Response {
    let payload = json!({
        "error": format!("'{raw}' is not a valid employee id"),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn not_found_response(id: &EmployeeId) -> Response {
    let payload = json!({
        "error": "employee not found",
        "employee_id": id,
    });
    (StatusCode::NOT_FOUND, Json(payload)).into_response()
}

/// Map service failures onto status codes: client errors for rule violations, 5xx otherwise.
pub(crate) fn error_response(err: EmployeeServiceError) -> Response {
    match err {
        EmployeeServiceError::Validation(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        EmployeeServiceError::InvalidRaise(error) => {
            let payload = json!({
                "error": error.to_string(),
                "attempted": error.attempted(),
            });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        EmployeeServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "employee not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        EmployeeServiceError::Repository(RepositoryError::Conflict) => {
            let payload = json!({ "error": "employee already exists" });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        other => {
            error!(error = %other, "employee request failed");
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
