//! Reporting endpoints: chart-ready tables, dashboard stats and CSV/PDF
//! export sinks.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    services::reports::{
        self, assembly_component_counts_table, maintenance_by_month_table, status_summary_table,
        type_summary_table, DashboardSummary, ReportTable,
    },
    AppState,
};

/// PDF export handle: the table data plus the dated filename. Rendering
/// happens client-side from the same table the charts consume.
#[derive(Serialize, ToSchema)]
pub struct PdfExport {
    pub filename: String,
    pub table: ReportTable,
}

/// Resolve a report name to its table
async fn table_for(state: &AppState, report: &str) -> AppResult<ReportTable> {
    let svc = &state.services.reports;
    match report {
        "status" => Ok(status_summary_table(&svc.asset_status_counts().await?)),
        "types" => Ok(type_summary_table(&svc.asset_type_counts().await?)),
        "maintenance" => Ok(maintenance_by_month_table(
            &svc.maintenance_month_buckets().await?,
        )),
        "assemblies" => Ok(assembly_component_counts_table(
            &svc.assembly_component_counts().await?,
        )),
        "warranty" => svc.warranty_report().await,
        "inventory" => svc.full_inventory_report().await,
        other => Err(AppError::BadRequest(format!("Unknown report: {}", other))),
    }
}

/// Get a report table by name
#[utoipa::path(
    get,
    path = "/reports/{report}",
    tag = "reports",
    params(
        ("report" = String, Path, description = "Report name: status, types, maintenance, assemblies, warranty or inventory")
    ),
    responses(
        (status = 200, description = "Report table", body = ReportTable),
        (status = 400, description = "Unknown report name")
    )
)]
pub async fn get_report(
    State(state): State<AppState>,
    Path(report): Path<String>,
) -> AppResult<Json<ReportTable>> {
    let table = table_for(&state, &report).await?;
    Ok(Json(table))
}

/// Download a report as CSV
#[utoipa::path(
    get,
    path = "/reports/{report}/csv",
    tag = "reports",
    params(
        ("report" = String, Path, description = "Report name")
    ),
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv", body = String),
        (status = 400, description = "Unknown report name")
    )
)]
pub async fn export_report_csv(
    State(state): State<AppState>,
    Path(report): Path<String>,
) -> AppResult<impl IntoResponse> {
    let table = table_for(&state, &report).await?;
    let csv = reports::to_csv(&table);
    let filename = reports::csv_filename(&report, Utc::now().date_naive());

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    ))
}

/// Get a report prepared for PDF export: the table plus the dated filename
#[utoipa::path(
    get,
    path = "/reports/{report}/pdf",
    tag = "reports",
    params(
        ("report" = String, Path, description = "Report name")
    ),
    responses(
        (status = 200, description = "PDF export handle", body = PdfExport),
        (status = 400, description = "Unknown report name")
    )
)]
pub async fn export_report_pdf(
    State(state): State<AppState>,
    Path(report): Path<String>,
) -> AppResult<Json<PdfExport>> {
    let table = table_for(&state, &report).await?;
    Ok(Json(PdfExport {
        filename: reports::pdf_filename(&report, Utc::now().date_naive()),
        table,
    }))
}

/// Dashboard landing-page summary
#[utoipa::path(
    get,
    path = "/stats",
    tag = "reports",
    responses(
        (status = 200, description = "Dashboard summary", body = DashboardSummary)
    )
)]
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<DashboardSummary>> {
    let summary = state.services.reports.dashboard().await?;
    Ok(Json(summary))
}
