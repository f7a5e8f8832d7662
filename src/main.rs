//! Inventra Server - IT Asset Inventory Management System
//!
//! A Rust REST API server for tracking IT assets, components, assemblies
//! and maintenance work.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventra_server::{
    api,
    config::AppConfig,
    repository::Repository,
    services::{notify::TracingNotifier, Services},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("inventra_server={},tower_http=debug", config.logging.level).into()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Inventra Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool.clone());
    let services = Services::new(repository, &config.inventory, Arc::new(TracingNotifier));

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
        pool,
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(
        server_host.parse().expect("Invalid host address"),
        server_port,
    );

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Assets
        .route("/assets", get(api::assets::list_assets))
        .route("/assets", post(api::assets::create_asset))
        .route("/assets/:id", get(api::assets::get_asset))
        .route("/assets/:id", put(api::assets::update_asset))
        .route("/assets/:id", delete(api::assets::delete_asset))
        // Components
        .route("/components", get(api::components::list_components))
        .route("/components", post(api::components::create_component))
        .route("/components/:id", get(api::components::get_component))
        .route("/components/:id", put(api::components::update_component))
        .route("/components/:id", delete(api::components::delete_component))
        // Assemblies
        .route("/assemblies", get(api::assemblies::list_assemblies))
        .route("/assemblies", post(api::assemblies::create_assembly))
        .route("/assemblies/:id", get(api::assemblies::get_assembly))
        .route("/assemblies/:id", put(api::assemblies::update_assembly))
        .route("/assemblies/:id", delete(api::assemblies::delete_assembly))
        // Maintenance tasks
        .route("/tasks", get(api::tasks::list_tasks))
        .route("/tasks", post(api::tasks::create_task))
        .route("/tasks/from-scan", post(api::tasks::create_task_from_scan))
        .route("/tasks/:id", get(api::tasks::get_task))
        .route("/tasks/:id", put(api::tasks::update_task))
        .route("/tasks/:id", delete(api::tasks::delete_task))
        .route("/tasks/:id/complete", post(api::tasks::complete_task))
        // Users
        .route("/users", get(api::users::list_users))
        .route("/users", post(api::users::create_user))
        .route("/users/:id", get(api::users::get_user))
        .route("/users/:id", put(api::users::update_user))
        .route("/users/:id", delete(api::users::delete_user))
        // Departments
        .route("/departments", get(api::departments::list_departments))
        .route("/departments", post(api::departments::create_department))
        .route("/departments/:id", get(api::departments::get_department))
        .route("/departments/:id", put(api::departments::update_department))
        .route(
            "/departments/:id",
            delete(api::departments::delete_department),
        )
        // Reports
        .route("/reports/:report", get(api::reports::get_report))
        .route("/reports/:report/csv", get(api::reports::export_report_csv))
        .route("/reports/:report/pdf", get(api::reports::export_report_pdf))
        .route("/stats", get(api::reports::get_stats))
        // QR identification
        .route("/qr/assets/:id", get(api::qr::encode_asset_qr))
        .route("/qr/decode", post(api::qr::decode_qr))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
