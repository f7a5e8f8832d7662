//! User directory service

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser, User},
    repository::Repository,
    services::notify::{NotificationPort, Severity},
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    notifier: Arc<dyn NotificationPort>,
}

impl UsersService {
    pub fn new(repository: Repository, notifier: Arc<dyn NotificationPort>) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.surface(self.repository.users.list().await, "Failed to load users")
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<User> {
        self.surface(
            self.repository.users.get_by_id(id).await,
            "Failed to load user",
        )
        .await
    }

    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        self.surface(
            self.repository.users.create(Uuid::new_v4(), data).await,
            "Failed to create user",
        )
        .await
    }

    pub async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        self.surface(
            self.repository.users.update(id, data).await,
            "Failed to update user",
        )
        .await
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.surface(
            self.repository.users.delete(id).await,
            "Failed to delete user",
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
