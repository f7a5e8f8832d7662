//! Component catalog service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::component::{Component, CreateComponent, Specifications, UpdateComponent},
    models::enums::ComponentType,
    repository::Repository,
    services::notify::{NotificationPort, Severity},
};

#[derive(Clone)]
pub struct ComponentsService {
    repository: Repository,
    notifier: Arc<dyn NotificationPort>,
}

impl ComponentsService {
    pub fn new(repository: Repository, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Component>> {
        self.surface(
            self.repository.components.list().await,
            "Failed to load components",
        )
        .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Component> {
        self.surface(
            self.repository.components.get_by_id(id).await,
            "Failed to load component",
        )
        .await
    }

    /// Create a component. When no specifications are supplied, an empty
    /// variant matching the component type is stored, so typed fields are
    /// available to the edit form later.
    pub async fn create(&self, data: &CreateComponent) -> AppResult<Component> {
        let specifications = match &data.specifications {
            Some(spec) => spec.clone(),
            None => Specifications::empty_for(ComponentType::from(data.component_type.as_str())),
        };
        self.surface(
            self.repository
                .components
                .create(Uuid::new_v4(), &specifications, data)
                .await,
            "Failed to create component",
        )
        .await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateComponent) -> AppResult<Component> {
        self.surface(
            self.repository.components.update(id, data).await,
            "Failed to update component",
        )
        .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.surface(
            self.repository.components.delete(id).await,
            "Failed to delete component",
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
