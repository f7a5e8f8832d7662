//! Data models for Inventra

pub mod assembly;
pub mod asset;
pub mod component;
pub mod department;
pub mod enums;
pub mod qr;
pub mod task;
pub mod user;

// Re-export commonly used types
pub use assembly::{Assembly, AssemblyComponent};
pub use asset::Asset;
pub use component::{Component, Specifications};
pub use department::Department;
pub use enums::{AssetStatus, ComponentType, Recurrence, TaskPriority, TaskStatus};
pub use qr::{QrPayload, ScannedAsset};
pub use task::MaintenanceTask;
pub use user::User;
