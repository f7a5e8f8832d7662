//! Assembly models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::AssetStatus;

/// A member of an assembly, resolved at read time against the asset
/// directory. `name` and `type` are never stored on the join row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssemblyComponent {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
}

/// Assembly record. `components` is stitched on after the row query.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assembly {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub status: AssetStatus,
    pub location: Option<String>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(skip)]
    #[serde(default)]
    pub components: Vec<AssemblyComponent>,
}

/// Create assembly request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssembly {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub status: Option<AssetStatus>,
    pub location: Option<String>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    /// Asset ids to link; one join row is written per id
    #[serde(default)]
    pub asset_ids: Vec<Uuid>,
}

/// Update assembly request. The join rows are fully replaced with
/// `asset_ids`, never diffed.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssembly {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<AssetStatus>,
    pub location: Option<String>,
    pub last_maintenance: Option<NaiveDate>,
    pub next_maintenance: Option<NaiveDate>,
    #[serde(default)]
    pub asset_ids: Vec<Uuid>,
}
