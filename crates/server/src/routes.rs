use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{DepartmentService, EmployeeService};

pub mod departments;
pub mod employees;

/// Shared handler state: one service per entity, behind Arcs so the router
/// stays cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    pub departments: Arc<DepartmentService>,
    pub employees: Arc<EmployeeService<DepartmentService>>,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health plus the two entity surfaces.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/departments",
            get(departments::list).post(departments::create),
        )
        .route(
            "/departments/:code",
            get(departments::get_by_code)
                .put(departments::update)
                .delete(departments::delete),
        )
        .route("/employees", get(employees::list).post(employees::create))
        .route(
            "/employees/:id",
            get(employees::get_by_id)
                .put(employees::update)
                .delete(employees::delete),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
