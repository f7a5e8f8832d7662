//! Reporting layer: pure table builders over aggregated rows, CSV
//! serialization, and the SQL aggregations feeding them.

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use sqlx::Row;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::asset::Asset,
    repository::Repository,
};

/// Days before expiry during which a warranty counts as "Expiring Soon"
pub const WARRANTY_WINDOW_DAYS: i64 = 90;

/// One labelled count in a chart-ready aggregation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatEntry {
    pub label: String,
    pub value: i64,
}

/// A chart/export-ready table: header row plus data rows
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Dashboard landing-page summary
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub assets_total: i64,
    pub components_total: i64,
    pub assemblies_total: i64,
    pub tasks_total: i64,
    pub tasks_overdue: i64,
    pub assets_by_status: Vec<StatEntry>,
}

// ---------------------------------------------------------------------------
// Warranty classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum WarrantyStatus {
    Expired,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    Valid,
}

impl std::fmt::Display for WarrantyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            WarrantyStatus::Expired => "Expired",
            WarrantyStatus::ExpiringSoon => "Expiring Soon",
            WarrantyStatus::Valid => "Valid",
        };
        write!(f, "{}", label)
    }
}

impl WarrantyStatus {
    /// Three date comparisons: past -> Expired, inside the 90-day window ->
    /// Expiring Soon, otherwise Valid.
    pub fn classify(today: NaiveDate, warranty: NaiveDate) -> Self {
        if today > warranty {
            WarrantyStatus::Expired
        } else if today < warranty && warranty < today + Duration::days(WARRANTY_WINDOW_DAYS) {
            WarrantyStatus::ExpiringSoon
        } else {
            WarrantyStatus::Valid
        }
    }
}

// ---------------------------------------------------------------------------
// Pure table builders
// ---------------------------------------------------------------------------

pub fn status_summary_table(entries: &[StatEntry]) -> ReportTable {
    count_table("Asset Status Summary", "Status", entries)
}

pub fn type_summary_table(entries: &[StatEntry]) -> ReportTable {
    count_table("Asset Type Summary", "Type", entries)
}

pub fn maintenance_by_month_table(entries: &[StatEntry]) -> ReportTable {
    count_table("Maintenance Tasks by Month", "Month", entries)
}

pub fn assembly_component_counts_table(entries: &[StatEntry]) -> ReportTable {
    count_table("Assembly Component Counts", "Assembly", entries)
}

fn count_table(title: &str, label_header: &str, entries: &[StatEntry]) -> ReportTable {
    ReportTable {
        title: title.to_string(),
        headers: vec![label_header.to_string(), "Count".to_string()],
        rows: entries
            .iter()
            .map(|e| vec![e.label.clone(), e.value.to_string()])
            .collect(),
    }
}

/// Warranty window report over assets that carry a warranty date
pub fn warranty_table(assets: &[Asset], today: NaiveDate) -> ReportTable {
    let rows = assets
        .iter()
        .filter_map(|asset| {
            asset.warranty_expiry.map(|warranty| {
                vec![
                    asset.inventory_number.clone(),
                    asset.name.clone(),
                    warranty.to_string(),
                    WarrantyStatus::classify(today, warranty).to_string(),
                ]
            })
        })
        .collect();
    ReportTable {
        title: "Warranty Status".to_string(),
        headers: vec![
            "Inventory Number".to_string(),
            "Name".to_string(),
            "Warranty Expiry".to_string(),
            "Status".to_string(),
        ],
        rows,
    }
}

/// Full inventory listing
pub fn full_inventory_table(assets: &[Asset]) -> ReportTable {
    ReportTable {
        title: "Full Inventory".to_string(),
        headers: vec![
            "Inventory Number".to_string(),
            "Name".to_string(),
            "Type".to_string(),
            "Status".to_string(),
            "Location".to_string(),
            "Assigned To".to_string(),
        ],
        rows: assets
            .iter()
            .map(|asset| {
                vec![
                    asset.inventory_number.clone(),
                    asset.name.clone(),
                    asset.asset_type.clone(),
                    asset.status.to_string(),
                    asset.location.clone().unwrap_or_default(),
                    asset.assigned_to.clone().unwrap_or_default(),
                ]
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Export sinks
// ---------------------------------------------------------------------------

/// Serialize a table as UTF-8 CSV: header row plus data rows
pub fn to_csv(table: &ReportTable) -> String {
    let mut out = String::new();
    out.push_str(&csv_line(&table.headers));
    for row in &table.rows {
        out.push_str(&csv_line(row));
    }
    out
}

fn csv_line(fields: &[String]) -> String {
    let mut line = fields
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",");
    line.push('\n');
    line
}

fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// `<report>-<YYYY-MM-DD>.csv`
pub fn csv_filename(report: &str, date: NaiveDate) -> String {
    format!("{}-{}.csv", report, date.format("%Y-%m-%d"))
}

/// `<report>-<YYYY-MM-DD>.pdf` (the tabular PDF sink shares the table and
/// filename contract; rendering happens client-side)
pub fn pdf_filename(report: &str, date: NaiveDate) -> String {
    format!("{}-{}.pdf", report, date.format("%Y-%m-%d"))
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Asset counts grouped by status
    pub async fn asset_status_counts(&self) -> AppResult<Vec<StatEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT status::text as label, COUNT(*) as value
            FROM assets
            GROUP BY status
            ORDER BY value DESC
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|row| StatEntry {
                label: row.get("label"),
                value: row.get("value"),
            })
            .collect())
    }

    /// Asset counts grouped by type
    pub async fn asset_type_counts(&self) -> AppResult<Vec<StatEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT asset_type as label, COUNT(*) as value
            FROM assets
            GROUP BY asset_type
            ORDER BY value DESC
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|row| StatEntry {
                label: row.get("label"),
                value: row.get("value"),
            })
            .collect())
    }

    /// Maintenance tasks bucketed by scheduled month
    pub async fn maintenance_month_buckets(&self) -> AppResult<Vec<StatEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT TO_CHAR(DATE_TRUNC('month', scheduled_date), 'YYYY-MM') as label,
                   COUNT(*) as value
            FROM maintenance_tasks
            GROUP BY DATE_TRUNC('month', scheduled_date)
            ORDER BY label
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|row| StatEntry {
                label: row.get("label"),
                value: row.get("value"),
            })
            .collect())
    }

    /// Component counts per assembly (live join, assemblies with no members
    /// still appear with zero)
    pub async fn assembly_component_counts(&self) -> AppResult<Vec<StatEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT a.name as label, COUNT(aa.asset_id) as value
            FROM assemblies a
            LEFT JOIN assembly_assets aa ON aa.assembly_id = a.id
            GROUP BY a.id, a.name
            ORDER BY value DESC
            "#,
        )
        .fetch_all(&self.repository.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|row| StatEntry {
                label: row.get("label"),
                value: row.get("value"),
            })
            .collect())
    }

    /// Warranty report over the full asset directory
    pub async fn warranty_report(&self) -> AppResult<ReportTable> {
        let assets = self.repository.assets.list().await?;
        Ok(warranty_table(&assets, Utc::now().date_naive()))
    }

    /// Full inventory report
    pub async fn full_inventory_report(&self) -> AppResult<ReportTable> {
        let assets = self.repository.assets.list().await?;
        Ok(full_inventory_table(&assets))
    }

    /// Landing page summary
    pub async fn dashboard(&self) -> AppResult<DashboardSummary> {
        let pool = &self.repository.pool;

        let assets_total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assets")
            .fetch_one(pool)
            .await?;
        let components_total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM components")
            .fetch_one(pool)
            .await?;
        let assemblies_total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM assemblies")
            .fetch_one(pool)
            .await?;
        let tasks_total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_tasks")
            .fetch_one(pool)
            .await?;
        let tasks_overdue: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM maintenance_tasks WHERE status = 'Overdue'",
        )
        .fetch_one(pool)
        .await?;

        Ok(DashboardSummary {
            assets_total,
            components_total,
            assemblies_total,
            tasks_total,
            tasks_overdue,
            assets_by_status: self.asset_status_counts().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_warranty_classification() {
        let today = date(2025, 6, 1);
        assert_eq!(
            WarrantyStatus::classify(today, date(2025, 5, 31)),
            WarrantyStatus::Expired
        );
        assert_eq!(
            WarrantyStatus::classify(today, date(2025, 7, 1)),
            WarrantyStatus::ExpiringSoon
        );
        assert_eq!(
            WarrantyStatus::classify(today, date(2026, 6, 1)),
            WarrantyStatus::Valid
        );
    }

    #[test]
    fn test_warranty_window_boundary() {
        let today = date(2025, 6, 1);
        // One day inside the window
        assert_eq!(
            WarrantyStatus::classify(today, today + Duration::days(89)),
            WarrantyStatus::ExpiringSoon
        );
        // Exactly 90 days out falls outside the strict window
        assert_eq!(
            WarrantyStatus::classify(today, today + Duration::days(90)),
            WarrantyStatus::Valid
        );
    }

    #[test]
    fn test_count_table_shape() {
        let entries = vec![
            StatEntry { label: "Active".to_string(), value: 12 },
            StatEntry { label: "Maintenance".to_string(), value: 3 },
        ];
        let table = status_summary_table(&entries);
        assert_eq!(table.headers, vec!["Status", "Count"]);
        assert_eq!(table.rows[0], vec!["Active", "12"]);
        assert_eq!(table.rows[1], vec!["Maintenance", "3"]);
    }

    #[test]
    fn test_csv_output() {
        let table = ReportTable {
            title: "Test".to_string(),
            headers: vec!["Name".to_string(), "Location".to_string()],
            rows: vec![vec!["Server, rack 4".to_string(), "Lab \"B\"".to_string()]],
        };
        let csv = to_csv(&table);
        assert_eq!(
            csv,
            "Name,Location\n\"Server, rack 4\",\"Lab \"\"B\"\"\"\n"
        );
    }

    #[test]
    fn test_export_filenames_carry_the_date() {
        let d = date(2025, 8, 29);
        assert_eq!(csv_filename("inventory", d), "inventory-2025-08-29.csv");
        assert_eq!(pdf_filename("warranty", d), "warranty-2025-08-29.pdf");
    }
}
