//! API handlers for Inventra REST endpoints

pub mod assemblies;
pub mod assets;
pub mod components;
pub mod departments;
pub mod health;
pub mod openapi;
pub mod qr;
pub mod reports;
pub mod tasks;
pub mod users;
