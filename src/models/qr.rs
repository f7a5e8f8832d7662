//! QR identification payloads

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire format of a printed asset QR code: a UTF-8 JSON object. There is no
/// versioning field; fields added later are treated as absent by old codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QrPayload {
    pub inventory_number: String,
    pub asset_id: String,
    /// ISO-8601, captured at encode time. Informational only: decode never
    /// validates it and there are no expiry semantics.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
}

/// Transient result of decoding a QR payload. Consumed once to prefill a
/// new maintenance task, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScannedAsset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub asset_id: String,
    pub inventory_number: String,
}
