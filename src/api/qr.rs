//! QR identification endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::qr::{QrPayload, ScannedAsset},
    AppState,
};

#[derive(Deserialize, ToSchema)]
pub struct DecodeRequest {
    /// Raw text read from a scanned code
    pub payload: String,
}

/// Build the printable QR payload for an asset
#[utoipa::path(
    get,
    path = "/qr/assets/{id}",
    tag = "qr",
    params(
        ("id" = Uuid, Path, description = "Asset ID")
    ),
    responses(
        (status = 200, description = "QR payload", body = QrPayload),
        (status = 404, description = "Asset not found")
    )
)]
pub async fn encode_asset_qr(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<QrPayload>> {
    let payload = state.services.qr.encode_for_asset(id).await?;
    Ok(Json(payload))
}

/// Decode a raw scan result into an asset reference
#[utoipa::path(
    post,
    path = "/qr/decode",
    tag = "qr",
    request_body = DecodeRequest,
    responses(
        (status = 200, description = "Decoded asset reference", body = ScannedAsset),
        (status = 400, description = "Malformed payload")
    )
)]
pub async fn decode_qr(
    State(state): State<AppState>,
    Json(request): Json<DecodeRequest>,
) -> AppResult<Json<ScannedAsset>> {
    let scanned = state.services.qr.decode_payload(&request.payload)?;
    Ok(Json(scanned))
}
