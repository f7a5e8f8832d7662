//! Department directory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::department::{CreateDepartment, Department, UpdateDepartment},
};

/// List all departments
#[utoipa::path(
    get,
    path = "/departments",
    tag = "departments",
    responses(
        (status = 200, description = "List of departments", body = Vec<Department>)
    )
)]
pub async fn list_departments(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Department>>> {
    let departments = state.services.departments.list().await?;
    Ok(Json(departments))
}

/// Get department details by ID
#[utoipa::path(
    get,
    path = "/departments/{id}",
    tag = "departments",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department details", body = Department),
        (status = 404, description = "Department not found")
    )
)]
pub async fn get_department(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Department>> {
    let department = state.services.departments.get_by_id(id).await?;
    Ok(Json(department))
}

/// Create a new department
#[utoipa::path(
    post,
    path = "/departments",
    tag = "departments",
    request_body = CreateDepartment,
    responses(
        (status = 201, description = "Department created", body = Department),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_department(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateDepartment>,
) -> AppResult<(StatusCode, Json<Department>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.departments.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing department
#[utoipa::path(
    put,
    path = "/departments/{id}",
    tag = "departments",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    request_body = UpdateDepartment,
    responses(
        (status = 200, description = "Department updated", body = Department),
        (status = 404, description = "Department not found")
    )
)]
pub async fn update_department(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDepartment>,
) -> AppResult<Json<Department>> {
    let updated = state.services.departments.update(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete a department
#[utoipa::path(
    delete,
    path = "/departments/{id}",
    tag = "departments",
    params(
        ("id" = Uuid, Path, description = "Department ID")
    ),
    responses(
        (status = 204, description = "Department deleted"),
        (status = 404, description = "Department not found")
    )
)]
pub async fn delete_department(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.departments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
