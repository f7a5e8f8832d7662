//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// AssetStatus
// ---------------------------------------------------------------------------

/// Lifecycle status shared by assets and assemblies
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "asset_status")]
pub enum AssetStatus {
    Active,
    Maintenance,
    Decommissioned,
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            AssetStatus::Active => "Active",
            AssetStatus::Maintenance => "Maintenance",
            AssetStatus::Decommissioned => "Decommissioned",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Maintenance task status
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "task_status")]
pub enum TaskStatus {
    Scheduled,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Completed,
    Overdue,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TaskStatus::Scheduled => "Scheduled",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// TaskPriority
// ---------------------------------------------------------------------------

/// Maintenance task priority
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "task_priority")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

// ---------------------------------------------------------------------------
// Recurrence
// ---------------------------------------------------------------------------

/// Task recurrence interval
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "task_recurrence")]
pub enum Recurrence {
    None,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

// ---------------------------------------------------------------------------
// ComponentType
// ---------------------------------------------------------------------------

/// Component taxonomy. The database keeps the raw string so unrecognized
/// types survive round trips; this enum drives dispatch (which specification
/// variant applies) with `Other` as the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ComponentType {
    Processor,
    Motherboard,
    Ram,
    Storage,
    Monitor,
    Peripherals,
    Accessories,
    Networking,
    Other,
}

impl From<&str> for ComponentType {
    fn from(v: &str) -> Self {
        match v {
            "Processor" => ComponentType::Processor,
            "Motherboard" => ComponentType::Motherboard,
            "RAM" | "Ram" => ComponentType::Ram,
            "Storage" => ComponentType::Storage,
            "Monitor" => ComponentType::Monitor,
            "Peripherals" => ComponentType::Peripherals,
            "Accessories" => ComponentType::Accessories,
            "Networking" => ComponentType::Networking,
            _ => ComponentType::Other,
        }
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ComponentType::Processor => "Processor",
            ComponentType::Motherboard => "Motherboard",
            ComponentType::Ram => "RAM",
            ComponentType::Storage => "Storage",
            ComponentType::Monitor => "Monitor",
            ComponentType::Peripherals => "Peripherals",
            ComponentType::Accessories => "Accessories",
            ComponentType::Networking => "Networking",
            ComponentType::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_type_round_trip() {
        assert_eq!(ComponentType::from("RAM"), ComponentType::Ram);
        assert_eq!(ComponentType::from("Processor"), ComponentType::Processor);
        assert_eq!(ComponentType::from("Graphics Card"), ComponentType::Other);
        assert_eq!(ComponentType::Ram.to_string(), "RAM");
    }

    #[test]
    fn test_task_status_serde_labels() {
        let v = serde_json::to_value(TaskStatus::InProgress).unwrap();
        assert_eq!(v, serde_json::json!("In Progress"));
        let s: TaskStatus = serde_json::from_value(serde_json::json!("Overdue")).unwrap();
        assert_eq!(s, TaskStatus::Overdue);
    }
}
