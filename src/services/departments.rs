//! Department directory service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::department::{CreateDepartment, Department, UpdateDepartment},
    repository::Repository,
    services::notify::{NotificationPort, Severity},
};

#[derive(Clone)]
pub struct DepartmentsService {
    repository: Repository,
    notifier: Arc<dyn NotificationPort>,
}

impl DepartmentsService {
    pub fn new(repository: Repository, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Department>> {
        self.surface(
            self.repository.departments.list().await,
            "Failed to load departments",
        )
        .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Department> {
        self.surface(
            self.repository.departments.get_by_id(id).await,
            "Failed to load department",
        )
        .await
    }

    pub async fn create(&self, data: &CreateDepartment) -> AppResult<Department> {
        self.surface(
            self.repository.departments.create(Uuid::new_v4(), data).await,
            "Failed to create department",
        )
        .await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateDepartment) -> AppResult<Department> {
        self.surface(
            self.repository.departments.update(id, data).await,
            "Failed to update department",
        )
        .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.surface(
            self.repository.departments.delete(id).await,
            "Failed to delete department",
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
