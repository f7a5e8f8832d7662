//! Maintenance task endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::qr::ScannedAsset,
    models::task::{CreateTask, MaintenanceTask, UpdateTask},
};

/// List all maintenance tasks
#[utoipa::path(
    get,
    path = "/tasks",
    tag = "tasks",
    responses(
        (status = 200, description = "List of tasks", body = Vec<MaintenanceTask>)
    )
)]
pub async fn list_tasks(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<MaintenanceTask>>> {
    let tasks = state.services.tasks.list().await?;
    Ok(Json(tasks))
}

/// Get task details by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task details", body = MaintenanceTask),
        (status = 404, description = "Task not found")
    )
)]
pub async fn get_task(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MaintenanceTask>> {
    let task = state.services.tasks.get_by_id(id).await?;
    Ok(Json(task))
}

/// Create a new maintenance task
#[utoipa::path(
    post,
    path = "/tasks",
    tag = "tasks",
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created", body = MaintenanceTask),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_task(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<MaintenanceTask>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.tasks.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Create a maintenance task prefilled from a decoded QR scan
#[utoipa::path(
    post,
    path = "/tasks/from-scan",
    tag = "tasks",
    request_body = ScannedAsset,
    responses(
        (status = 201, description = "Task created", body = MaintenanceTask),
        (status = 400, description = "Malformed asset reference")
    )
)]
pub async fn create_task_from_scan(
    State(state): State<crate::AppState>,
    Json(payload): Json<ScannedAsset>,
) -> AppResult<(StatusCode, Json<MaintenanceTask>)> {
    let created = state.services.tasks.create_from_scan(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing task
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated", body = MaintenanceTask),
        (status = 404, description = "Task not found")
    )
)]
pub async fn update_task(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTask>,
) -> AppResult<Json<MaintenanceTask>> {
    let updated = state.services.tasks.update(id, &payload).await?;
    Ok(Json(updated))
}

/// Mark a task as completed, stamping the completion date with today
#[utoipa::path(
    post,
    path = "/tasks/{id}/complete",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task completed", body = MaintenanceTask),
        (status = 404, description = "Task not found")
    )
)]
pub async fn complete_task(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MaintenanceTask>> {
    let task = state.services.tasks.mark_completed(id).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found")
    )
)]
pub async fn delete_task(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.tasks.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
