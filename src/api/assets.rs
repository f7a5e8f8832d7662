//! Asset directory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::asset::{Asset, CreateAsset, UpdateAsset},
};

/// List all assets ordered by inventory number
#[utoipa::path(
    get,
    path = "/assets",
    tag = "assets",
    responses(
        (status = 200, description = "List of assets", body = Vec<Asset>)
    )
)]
pub async fn list_assets(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = state.services.assets.list().await?;
    Ok(Json(assets))
}

/// Get asset details by ID
#[utoipa::path(
    get,
    path = "/assets/{id}",
    tag = "assets",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "Asset details", body = Asset),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn get_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Asset>> {
    let asset = state.services.assets.get_by_id(id).await?;
    Ok(Json(asset))
}

/// Create a new asset. The inventory number is generated server-side.
#[utoipa::path(
    post,
    path = "/assets",
    tag = "assets",
    request_body = CreateAsset,
    responses(
        (status = 201, description = "Asset created", body = Asset),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_asset(
    State(state): State<crate::AppState>,
    Json(payload): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let created = state.services.assets.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing asset
#[utoipa::path(
    put,
    path = "/assets/{id}",
    tag = "assets",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    request_body = UpdateAsset,
    responses(
        (status = 200, description = "Asset updated", body = Asset),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn update_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAsset>,
) -> AppResult<Json<Asset>> {
    let updated = state.services.assets.update(id, &payload).await?;
    Ok(Json(updated))
}

/// Delete an asset
#[utoipa::path(
    delete,
    path = "/assets/{id}",
    tag = "assets",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn delete_asset(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.services.assets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
