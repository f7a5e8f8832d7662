//! Business logic services

pub mod assemblies;
pub mod assets;
pub mod components;
pub mod departments;
pub mod inventory_code;
pub mod notify;
pub mod qr;
pub mod reports;
pub mod tasks;
pub mod users;

use std::sync::Arc;

use crate::{config::InventoryConfig, repository::Repository};

use inventory_code::InventoryCodeGenerator;
use notify::NotificationPort;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub assets: assets::AssetsService,
    pub components: components::ComponentsService,
    pub assemblies: assemblies::AssembliesService,
    pub tasks: tasks::TasksService,
    pub users: users::UsersService,
    pub departments: departments::DepartmentsService,
    pub reports: reports::ReportsService,
    pub qr: qr::QrService,
}

impl Services {
    /// Create all services with the given repository and notification port
    pub fn new(
        repository: Repository,
        inventory: &InventoryConfig,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        let generator = Arc::new(InventoryCodeGenerator::new(
            &inventory.prefix,
            &inventory.institution_code,
            inventory.sequence_strategy,
        ));
        Self {
            assets: assets::AssetsService::new(
                repository.clone(),
                generator,
                notifier.clone(),
            ),
            components: components::ComponentsService::new(repository.clone(), notifier.clone()),
            assemblies: assemblies::AssembliesService::new(repository.clone(), notifier.clone()),
            tasks: tasks::TasksService::new(repository.clone(), notifier.clone()),
            users: users::UsersService::new(repository.clone(), notifier.clone()),
            departments: departments::DepartmentsService::new(repository.clone(), notifier),
            reports: reports::ReportsService::new(repository.clone()),
            qr: qr::QrService::new(repository),
        }
    }
}
