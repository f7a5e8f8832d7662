//! Component catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::component::{Component, CreateComponent, UpdateComponent},
};

/// List all components
#[utoipa::path(
    get,
    path = "/components",
    tag = "components",
    responses(
        (status = 200, description = "List of components", body = Vec<Component>)
    )
)]
pub async fn list_components(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Component>>> {
    let components = state.services.components.list().await?;
    Ok(Json(components))
}

/// Get component details by ID
#[utoipa::path(
    get,
    path = "/components/{id}",
    tag = "components",
    params(
        ("id" = Uuid, Path, description = "Component ID")
    ),
    responses(
        (status = 200, description = "Component details", body = Component),
        (status = 404, description = "Component not found")
    )
)]
pub async fn get_component(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Component>> {
    let component = state.services.components.get_by_id(id).await?;
    Ok(Json(component))
}

/// Create a new component
#[utoipa::path(
    post,
    path = "/components",
    tag = "components",
    request_body = CreateComponent,
    responses(
        (status = 201, description = "Component created", body = Component),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_component(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateComponent>,
) -> AppResult<(StatusCode, Json<Component>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.components.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing component
#[utoipa::path(
    put,
    path = "/components/{id}",
    tag = "components",
    params(
        ("id" = Uuid, Path, description = "Component ID")
    ),
    request_body = UpdateComponent,
    responses(
        (status = 200, description = "Component updated", body = Component),
        (status = 404, description = "Component not found")
    )
)]
pub async fn update_component(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateComponent>,
) -> AppResult<Json<Component>> {
    let updated = state.services.components.update(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete a component
#[utoipa::path(
    delete,
    path = "/components/{id}",
    tag = "components",
    params(
        ("id" = Uuid, Path, description = "Component ID")
    ),
    responses(
        (status = 204, description = "Component deleted"),
        (status = 404, description = "Component not found")
    )
)]
pub async fn delete_component(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.components.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
