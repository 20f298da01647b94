// src/api/handlers/department_handler.rs
use crate::api::dto::department_dto::{
    DepartmentDetailDto, DepartmentListResponse, FacilityListResponse, ProgramListResponse,
};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::DepartmentIdPath;
use axum::{extract::State, routing::get, Json, Router};
use tracing::info;

pub async fn list_departments_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<DepartmentListResponse>> {
    let response = app_state.department_service.list_departments().await?;

    info!(count = response.departments.len(), "Listed departments");

    Ok(Json(response))
}

pub async fn get_department_detail_handler(
    State(app_state): State<AppState>,
    DepartmentIdPath(department_id): DepartmentIdPath,
) -> AppResult<Json<DepartmentDetailDto>> {
    info!(department_id, "Getting department detail");

    let detail = app_state
        .department_service
        .get_department_detail(department_id)
        .await?;

    Ok(Json(detail))
}

pub async fn get_department_programs_handler(
    State(app_state): State<AppState>,
    DepartmentIdPath(department_id): DepartmentIdPath,
) -> AppResult<Json<ProgramListResponse>> {
    info!(department_id, "Getting department programs");

    let programs = app_state
        .department_service
        .get_department_programs(department_id)
        .await?;

    Ok(Json(programs))
}

pub async fn get_department_facilities_handler(
    State(app_state): State<AppState>,
    DepartmentIdPath(department_id): DepartmentIdPath,
) -> AppResult<Json<FacilityListResponse>> {
    info!(department_id, "Getting department facilities");

    let facilities = app_state
        .department_service
        .get_department_facilities(department_id)
        .await?;

    Ok(Json(facilities))
}

async fn health_check_handler() -> &'static str {
    "OK"
}

// --- Router Setup ---

pub fn department_router(app_state: AppState) -> Router {
    // 末尾スラッシュあり・なしの両方を受け付ける
    Router::new()
        .route("/departments", get(list_departments_handler))
        .route("/departments/", get(list_departments_handler))
        .route(
            "/departments/{department_id}",
            get(get_department_detail_handler),
        )
        .route(
            "/departments/{department_id}/",
            get(get_department_detail_handler),
        )
        .route(
            "/departments/{department_id}/programs",
            get(get_department_programs_handler),
        )
        .route(
            "/departments/{department_id}/programs/",
            get(get_department_programs_handler),
        )
        .route(
            "/departments/{department_id}/facilities",
            get(get_department_facilities_handler),
        )
        .route(
            "/departments/{department_id}/facilities/",
            get(get_department_facilities_handler),
        )
        .route("/health", get(health_check_handler))
        .with_state(app_state)
}
