//! Maintenance task models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{Recurrence, TaskPriority, TaskStatus};

/// Maintenance task record. `asset_id` and `assembly_id` are both nullable;
/// the service rejects requests naming both, so the reachable states are
/// asset, assembly, or neither.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTask {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assigned_to: Option<String>,
    #[serde(rename = "asset")]
    pub asset_id: Option<Uuid>,
    #[serde(rename = "assembly")]
    pub assembly_id: Option<Uuid>,
    pub scheduled_date: NaiveDate,
    pub completed_date: Option<NaiveDate>,
    pub recurring: Recurrence,
    pub next_occurrence: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create task request (from a form or a QR-scan prefill)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<String>,
    #[serde(rename = "asset")]
    pub asset_id: Option<Uuid>,
    #[serde(rename = "assembly")]
    pub assembly_id: Option<Uuid>,
    pub scheduled_date: NaiveDate,
    pub recurring: Option<Recurrence>,
    pub next_occurrence: Option<NaiveDate>,
}

/// Update task request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assigned_to: Option<String>,
    #[serde(rename = "asset")]
    pub asset_id: Option<Uuid>,
    #[serde(rename = "assembly")]
    pub assembly_id: Option<Uuid>,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_date: Option<NaiveDate>,
    pub recurring: Option<Recurrence>,
    pub next_occurrence: Option<NaiveDate>,
}
