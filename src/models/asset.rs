//! Asset model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::AssetStatus;

/// Asset record. Columns are snake_case in storage, camelCase on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Uuid,
    /// Generated inventory number, e.g. IT-FA/KPTM/LAPTOP/IV/2025/IT/042
    pub inventory_number: String,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    pub status: AssetStatus,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub os: Option<String>,
    pub os_user: Option<String>,
    pub hostname: Option<String>,
    pub license_key: Option<String>,
    /// Component reference slots: a component id as text, or "N/A".
    /// Dangling references are possible since component deletion does not cascade.
    pub processor: Option<String>,
    pub motherboard: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub monitor: Option<String>,
    /// Ordered component id lists
    #[schema(value_type = Vec<String>)]
    pub peripherals: Json<Vec<String>>,
    #[schema(value_type = Vec<String>)]
    pub expansion_cards: Json<Vec<String>>,
    #[schema(value_type = Vec<String>)]
    pub accessories: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create asset request. The server generates the id and inventory number.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAsset {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub asset_type: String,
    /// Department code used in the generated inventory number
    #[validate(length(min = 1))]
    pub division: String,
    pub status: Option<AssetStatus>,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub os: Option<String>,
    pub os_user: Option<String>,
    pub hostname: Option<String>,
    pub license_key: Option<String>,
    pub processor: Option<String>,
    pub motherboard: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub monitor: Option<String>,
    #[serde(default)]
    pub peripherals: Vec<String>,
    #[serde(default)]
    pub expansion_cards: Vec<String>,
    #[serde(default)]
    pub accessories: Vec<String>,
}

/// Update asset request (partial field replace)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAsset {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub status: Option<AssetStatus>,
    pub location: Option<String>,
    pub assigned_to: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry: Option<NaiveDate>,
    pub os: Option<String>,
    pub os_user: Option<String>,
    pub hostname: Option<String>,
    pub license_key: Option<String>,
    pub processor: Option<String>,
    pub motherboard: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub monitor: Option<String>,
    pub peripherals: Option<Vec<String>>,
    pub expansion_cards: Option<Vec<String>>,
    pub accessories: Option<Vec<String>>,
}
