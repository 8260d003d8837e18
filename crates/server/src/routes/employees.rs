use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use models::employee::{EmployeeFilter, EmployeeUpdate, Model, NewEmployee};

use crate::errors::ApiError;
use crate::routes::AppState;

/// Query-string predicates for `GET /employees`; all optional, ANDed.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeListQuery {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub department: Option<String>,
}

impl From<EmployeeListQuery> for EmployeeFilter {
    fn from(q: EmployeeListQuery) -> Self {
        EmployeeFilter { id: q.id, name: q.name, department: q.department }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<EmployeeListQuery>,
) -> Result<Json<Vec<Model>>, ApiError> {
    let employees = state.employees.find(query.into()).await?;
    Ok(Json(employees))
}

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Model>, ApiError> {
    let employee = state.employees.get_by_id(id).await?;
    Ok(Json(employee))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Model>), ApiError> {
    let created = state.employees.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<EmployeeUpdate>,
) -> Result<Json<Model>, ApiError> {
    let updated = state.employees.update(id, body).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.employees.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
