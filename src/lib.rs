//! Inventra IT Asset Inventory Management System
//!
//! A Rust implementation of the Inventra inventory server, providing a REST
//! JSON API for managing assets, components, assemblies, maintenance tasks
//! and canned reports.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    /// Shared pool, also used directly by the readiness probe
    pub pool: sqlx::PgPool,
}
