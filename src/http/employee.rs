use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::employee::{CreateEmployeeInput, Employee, ServiceResult};
use crate::http::request::RequestIdExt;
use crate::http::response::bad_json;
use crate::http::server::AppState;

pub async fn list_employees(State(state): State<AppState>) -> ServiceResult<Json<Vec<Employee>>> {
    state.service.list_all().await.map(Json)
}

pub async fn search_employees(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> ServiceResult<Json<Vec<Employee>>> {
    state.service.search_by_name(&search).await.map(Json)
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ServiceResult<Json<Employee>> {
    state.service.get_by_id(&id).await.map(Json)
}

pub async fn highest_salary(State(state): State<AppState>) -> ServiceResult<Json<i64>> {
    state.service.highest_salary().await.map(Json)
}

pub async fn top_ten_names(State(state): State<AppState>) -> ServiceResult<Json<Vec<String>>> {
    state.service.top_ten_names().await.map(Json)
}

pub async fn create_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateEmployeeInput>, JsonRejection>,
) -> Response {
    let Json(input) = match payload {
        Ok(p) => p,
        Err(rejection) => return bad_json(rejection),
    };

    tracing::debug!(request_id = %headers.request_id(), "Creating employee");

    match state.service.create(&input).await {
        Ok(employee) => (StatusCode::CREATED, Json(employee)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ServiceResult<Json<String>> {
    tracing::debug!(request_id = %headers.request_id(), id = %id, "Deleting employee");
    state.service.delete_by_id(&id).await.map(Json)
}
