//! Assembly manager service: named bundles of assets over the
//! assembly_assets join table.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::assembly::{Assembly, CreateAssembly, UpdateAssembly},
    repository::Repository,
    services::notify::{NotificationPort, Severity},
};

#[derive(Clone)]
pub struct AssembliesService {
    repository: Repository,
    notifier: Arc<dyn NotificationPort>,
}

impl AssembliesService {
    pub fn new(repository: Repository, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// List assemblies with their component lists resolved against the asset
    /// directory. Orphaned links appear as placeholders, never hidden.
    pub async fn list(&self) -> AppResult<Vec<Assembly>> {
        self.surface(
            self.repository.assemblies.list().await,
            "Failed to load assemblies",
        )
        .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Assembly> {
        self.surface(
            self.repository.assemblies.get_by_id(id).await,
            "Failed to load assembly",
        )
        .await
    }

    /// Create an assembly and one join row per linked asset id
    pub async fn create(&self, data: &CreateAssembly) -> AppResult<Assembly> {
        self.surface(
            self.repository.assemblies.create(Uuid::new_v4(), data).await,
            "Failed to create assembly",
        )
        .await
    }

    /// Update assembly fields and fully replace the linked asset set
    pub async fn update(&self, id: Uuid, data: &UpdateAssembly) -> AppResult<Assembly> {
        self.surface(
            self.repository.assemblies.update(id, data).await,
            "Failed to update assembly",
        )
        .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.surface(
            self.repository.assemblies.delete(id).await,
            "Failed to delete assembly",
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
