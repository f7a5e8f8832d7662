//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{assemblies, assets, components, departments, health, qr, reports, tasks, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventra API",
        version = "1.0.0",
        description = "IT Asset Inventory Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Assets
        assets::list_assets,
        assets::get_asset,
        assets::create_asset,
        assets::update_asset,
        assets::delete_asset,
        // Components
        components::list_components,
        components::get_component,
        components::create_component,
        components::update_component,
        components::delete_component,
        // Assemblies
        assemblies::list_assemblies,
        assemblies::get_assembly,
        assemblies::create_assembly,
        assemblies::update_assembly,
        assemblies::delete_assembly,
        // Tasks
        tasks::list_tasks,
        tasks::get_task,
        tasks::create_task,
        tasks::create_task_from_scan,
        tasks::update_task,
        tasks::complete_task,
        tasks::delete_task,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Departments
        departments::list_departments,
        departments::get_department,
        departments::create_department,
        departments::update_department,
        departments::delete_department,
        // Reports
        reports::get_report,
        reports::export_report_csv,
        reports::export_report_pdf,
        reports::get_stats,
        // QR
        qr::encode_asset_qr,
        qr::decode_qr,
    ),
    components(
        schemas(
            // Assets
            crate::models::asset::Asset,
            crate::models::asset::CreateAsset,
            crate::models::asset::UpdateAsset,
            // Components
            crate::models::component::Component,
            crate::models::component::CreateComponent,
            crate::models::component::UpdateComponent,
            crate::models::component::Specifications,
            // Assemblies
            crate::models::assembly::Assembly,
            crate::models::assembly::AssemblyComponent,
            crate::models::assembly::CreateAssembly,
            crate::models::assembly::UpdateAssembly,
            // Tasks
            crate::models::task::MaintenanceTask,
            crate::models::task::CreateTask,
            crate::models::task::UpdateTask,
            // Users
            crate::models::user::User,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Departments
            crate::models::department::Department,
            crate::models::department::CreateDepartment,
            crate::models::department::UpdateDepartment,
            // Enums
            crate::models::enums::AssetStatus,
            crate::models::enums::TaskStatus,
            crate::models::enums::TaskPriority,
            crate::models::enums::Recurrence,
            crate::models::enums::ComponentType,
            // QR
            crate::models::qr::QrPayload,
            crate::models::qr::ScannedAsset,
            qr::DecodeRequest,
            // Reports
            crate::services::reports::StatEntry,
            crate::services::reports::ReportTable,
            crate::services::reports::DashboardSummary,
            crate::services::reports::WarrantyStatus,
            reports::PdfExport,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "assets", description = "Asset directory"),
        (name = "components", description = "Component catalog"),
        (name = "assemblies", description = "Asset assemblies"),
        (name = "tasks", description = "Maintenance task management"),
        (name = "users", description = "User directory"),
        (name = "departments", description = "Department directory"),
        (name = "reports", description = "Reports and statistics"),
        (name = "qr", description = "QR identification")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
