use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use models::department::{DepartmentUpdate, Model, NewDepartment};

use crate::errors::ApiError;
use crate::routes::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Model>>, ApiError> {
    let departments = state.departments.list().await?;
    Ok(Json(departments))
}

pub async fn get_by_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Model>, ApiError> {
    let department = state.departments.get_by_code(&code).await?;
    Ok(Json(department))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewDepartment>,
) -> Result<(StatusCode, Json<Model>), ApiError> {
    let created = state.departments.create(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(body): Json<DepartmentUpdate>,
) -> Result<Json<Model>, ApiError> {
    let updated = state.departments.update(&code, body).await?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.departments.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
