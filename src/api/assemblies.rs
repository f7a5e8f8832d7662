//! Assembly endpoints: named bundles of assets

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::assembly::{Assembly, CreateAssembly, UpdateAssembly},
};

/// List all assemblies with their resolved component lists
#[utoipa::path(
    get,
    path = "/assemblies",
    tag = "assemblies",
    responses(
        (status = 200, description = "List of assemblies", body = Vec<Assembly>)
    )
)]
pub async fn list_assemblies(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Assembly>>> {
    let assemblies = state.services.assemblies.list().await?;
    Ok(Json(assemblies))
}

/// Get assembly details by ID
#[utoipa::path(
    get,
    path = "/assemblies/{id}",
    tag = "assemblies",
    params(
        ("id" = Uuid, Path, description = "Assembly ID")
    ),
    responses(
        (status = 200, description = "Assembly details", body = Assembly),
        (status = 404, description = "Assembly not found")
    )
)]
pub async fn get_assembly(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Assembly>> {
    let assembly = state.services.assemblies.get_by_id(id).await?;
    Ok(Json(assembly))
}

/// Create a new assembly with its linked asset set
#[utoipa::path(
    post,
    path = "/assemblies",
    tag = "assemblies",
    request_body = CreateAssembly,
    responses(
        (status = 201, description = "Assembly created", body = Assembly),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_assembly(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateAssembly>,
) -> AppResult<(StatusCode, Json<Assembly>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.assemblies.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an assembly. The linked asset set is fully replaced with the one
/// supplied in the request.
#[utoipa::path(
    put,
    path = "/assemblies/{id}",
    tag = "assemblies",
    params(
        ("id" = Uuid, Path, description = "Assembly ID")
    ),
    request_body = UpdateAssembly,
    responses(
        (status = 200, description = "Assembly updated", body = Assembly),
        (status = 404, description = "Assembly not found")
    )
)]
pub async fn update_assembly(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAssembly>,
) -> AppResult<Json<Assembly>> {
    let updated = state.services.assemblies.update(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete an assembly and its asset links
#[utoipa::path(
    delete,
    path = "/assemblies/{id}",
    tag = "assemblies",
    params(
        ("id" = Uuid, Path, description = "Assembly ID")
    ),
    responses(
        (status = 204, description = "Assembly deleted"),
        (status = 404, description = "Assembly not found")
    )
)]
pub async fn delete_assembly(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.assemblies.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
