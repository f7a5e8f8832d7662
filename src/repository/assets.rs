//! Assets repository for database operations

use chrono::Utc;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::asset::{Asset, CreateAsset, UpdateAsset},
};

#[derive(Clone)]
pub struct AssetsRepository {
    pool: Pool<Postgres>,
}

impl AssetsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all assets
    pub async fn list(&self) -> AppResult<Vec<Asset>> {
        let rows = sqlx::query_as::<_, Asset>("SELECT * FROM assets ORDER BY inventory_number")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get asset by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Get asset by its generated inventory number (QR lookups)
    pub async fn get_by_inventory_number(&self, inventory_number: &str) -> AppResult<Asset> {
        sqlx::query_as::<_, Asset>("SELECT * FROM assets WHERE inventory_number = $1")
            .bind(inventory_number)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Asset {} not found", inventory_number))
            })
    }

    /// Create asset. The id and inventory number are generated by the caller.
    pub async fn create(
        &self,
        id: Uuid,
        inventory_number: &str,
        data: &CreateAsset,
    ) -> AppResult<Asset> {
        let row = sqlx::query_as::<_, Asset>(
            r#"
            INSERT INTO assets (
                id, inventory_number, name, asset_type, status, location, assigned_to,
                purchase_date, warranty_expiry, os, os_user, hostname, license_key,
                processor, motherboard, ram, storage, monitor,
                peripherals, expansion_cards, accessories
            )
            VALUES ($1, $2, $3, $4, COALESCE($5, 'Active'), $6, $7, $8, $9, $10, $11,
                    $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(inventory_number)
        .bind(&data.name)
        .bind(&data.asset_type)
        .bind(data.status)
        .bind(&data.location)
        .bind(&data.assigned_to)
        .bind(data.purchase_date)
        .bind(data.warranty_expiry)
        .bind(&data.os)
        .bind(&data.os_user)
        .bind(&data.hostname)
        .bind(&data.license_key)
        .bind(&data.processor)
        .bind(&data.motherboard)
        .bind(&data.ram)
        .bind(&data.storage)
        .bind(&data.monitor)
        .bind(Json(&data.peripherals))
        .bind(Json(&data.expansion_cards))
        .bind(Json(&data.accessories))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update asset (partial field replace)
    pub async fn update(&self, id: Uuid, data: &UpdateAsset) -> AppResult<Asset> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.asset_type, "asset_type");
        add_field!(data.status, "status");
        add_field!(data.location, "location");
        add_field!(data.assigned_to, "assigned_to");
        add_field!(data.purchase_date, "purchase_date");
        add_field!(data.warranty_expiry, "warranty_expiry");
        add_field!(data.os, "os");
        add_field!(data.os_user, "os_user");
        add_field!(data.hostname, "hostname");
        add_field!(data.license_key, "license_key");
        add_field!(data.processor, "processor");
        add_field!(data.motherboard, "motherboard");
        add_field!(data.ram, "ram");
        add_field!(data.storage, "storage");
        add_field!(data.monitor, "monitor");
        add_field!(data.peripherals, "peripherals");
        add_field!(data.expansion_cards, "expansion_cards");
        add_field!(data.accessories, "accessories");

        let query = format!(
            "UPDATE assets SET {} WHERE id = '{}' RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Asset>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.asset_type);
        bind_field!(data.status);
        bind_field!(data.location);
        bind_field!(data.assigned_to);
        bind_field!(data.purchase_date);
        bind_field!(data.warranty_expiry);
        bind_field!(data.os);
        bind_field!(data.os_user);
        bind_field!(data.hostname);
        bind_field!(data.license_key);
        bind_field!(data.processor);
        bind_field!(data.motherboard);
        bind_field!(data.ram);
        bind_field!(data.storage);
        bind_field!(data.monitor);
        if let Some(ref val) = data.peripherals {
            builder = builder.bind(Json(val));
        }
        if let Some(ref val) = data.expansion_cards {
            builder = builder.bind(Json(val));
        }
        if let Some(ref val) = data.accessories {
            builder = builder.bind(Json(val));
        }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Asset {} not found", id)))
    }

    /// Delete asset by id (hard delete, nothing cascades)
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Asset {} not found", id)));
        }
        Ok(())
    }
}
