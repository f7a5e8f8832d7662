//! Maintenance task service

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::qr::ScannedAsset,
    models::task::{CreateTask, MaintenanceTask, UpdateTask},
    repository::Repository,
    services::notify::{NotificationPort, Severity},
};

#[derive(Clone)]
pub struct TasksService {
    repository: Repository,
    notifier: Arc<dyn NotificationPort>,
}

impl TasksService {
    pub fn new(repository: Repository, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceTask>> {
        self.surface(self.repository.tasks.list().await, "Failed to load tasks")
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceTask> {
        self.surface(
            self.repository.tasks.get_by_id(id).await,
            "Failed to load task",
        )
        .await
    }

    /// Create a task. A task may target an asset or an assembly, never both.
    pub async fn create(&self, data: &CreateTask) -> AppResult<MaintenanceTask> {
        if data.asset_id.is_some() && data.assembly_id.is_some() {
            return Err(AppError::Validation(
                "A task may target an asset or an assembly, not both".to_string(),
            ));
        }
        self.surface(
            self.repository.tasks.create(Uuid::new_v4(), data).await,
            "Failed to create task",
        )
        .await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateTask) -> AppResult<MaintenanceTask> {
        if data.asset_id.is_some() && data.assembly_id.is_some() {
            return Err(AppError::Validation(
                "A task may target an asset or an assembly, not both".to_string(),
            ));
        }
        self.surface(
            self.repository.tasks.update(id, data).await,
            "Failed to update task",
        )
        .await
    }

    /// Mark a task completed: status becomes Completed and completed_date is
    /// stamped with today. Calling it again restamps the date.
    pub async fn mark_completed(&self, id: Uuid) -> AppResult<MaintenanceTask> {
        let today = Utc::now().date_naive();
        self.surface(
            self.repository.tasks.mark_completed(id, today).await,
            "Failed to complete task",
        )
        .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.surface(
            self.repository.tasks.delete(id).await,
            "Failed to delete task",
        )
        .await
    }

    /// Create a task prefilled from a decoded QR scan. Old printed codes
    /// carry a legacy short id instead of a UUID; those are resolved through
    /// the inventory number.
    pub async fn create_from_scan(&self, scanned: &ScannedAsset) -> AppResult<MaintenanceTask> {
        let asset_id = match scanned.asset_id.parse::<Uuid>() {
            Ok(id) => id,
            Err(_) => {
                self.surface(
                    self.repository
                        .assets
                        .get_by_inventory_number(&scanned.inventory_number)
                        .await,
                    "Failed to resolve scanned asset",
                )
                .await?
                .id
            }
        };
        let data = prefill_from_scan(scanned, asset_id);
        self.surface(
            self.repository.tasks.create(Uuid::new_v4(), &data).await,
            "Failed to create task",
        )
        .await
    }

    async fn surface<T>(&self, result: AppResult<T>, message: &str) -> AppResult<T> {
        if result.is_err() {
            self.notifier.notify(Severity::Error, message).await;
        }
        result
    }
}

/// Build a task form prefill from a decoded QR scan. The scanned asset is
/// consumed once and never persisted; the resolved asset id targets the task.
pub fn prefill_from_scan(scanned: &ScannedAsset, asset_id: Uuid) -> CreateTask {
    CreateTask {
        title: format!("Maintenance - {}", scanned.name),
        description: Some(format!(
            "Created from QR scan of {} ({})",
            scanned.name, scanned.inventory_number
        )),
        status: None,
        priority: None,
        assigned_to: None,
        asset_id: Some(asset_id),
        assembly_id: None,
        scheduled_date: Utc::now().date_naive(),
        recurring: None,
        next_occurrence: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanned(asset_id: &str) -> ScannedAsset {
        ScannedAsset {
            id: asset_id.to_string(),
            name: "Dell XPS 15".to_string(),
            asset_type: "Laptop".to_string(),
            asset_id: asset_id.to_string(),
            inventory_number: "IT-FA/KPTM/LAPTOP/IV/2025/IT/042".to_string(),
        }
    }

    #[test]
    fn test_prefill_targets_the_scanned_asset() {
        let id = Uuid::new_v4();
        let scanned = scanned(&id.to_string());
        let prefill = prefill_from_scan(&scanned, id);
        assert_eq!(prefill.asset_id, Some(id));
        assert_eq!(prefill.assembly_id, None);
        assert!(prefill.title.contains("Dell XPS 15"));
        assert_eq!(prefill.scheduled_date, Utc::now().date_naive());
    }

    #[test]
    fn test_prefill_ignores_the_legacy_id_string() {
        // Old printed codes carry short ids like "A1004"; the caller resolves
        // the real row and the prefill only ever uses the resolved UUID.
        let resolved = Uuid::new_v4();
        let scanned = scanned("A1004");
        let prefill = prefill_from_scan(&scanned, resolved);
        assert_eq!(prefill.asset_id, Some(resolved));
        assert!(prefill
            .description
            .as_deref()
            .unwrap()
            .contains("IT-FA/KPTM/LAPTOP/IV/2025/IT/042"));
    }
}
