//! Repository layer for database operations

pub mod assemblies;
pub mod assets;
pub mod components;
pub mod departments;
pub mod tasks;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub assets: assets::AssetsRepository,
    pub components: components::ComponentsRepository,
    pub assemblies: assemblies::AssembliesRepository,
    pub tasks: tasks::TasksRepository,
    pub users: users::UsersRepository,
    pub departments: departments::DepartmentsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            assets: assets::AssetsRepository::new(pool.clone()),
            components: components::ComponentsRepository::new(pool.clone()),
            assemblies: assemblies::AssembliesRepository::new(pool.clone()),
            tasks: tasks::TasksRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            departments: departments::DepartmentsRepository::new(pool.clone()),
            pool,
        }
    }
}
