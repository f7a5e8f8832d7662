//! Components repository for database operations

use chrono::Utc;
use sqlx::types::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::component::{Component, CreateComponent, Specifications, UpdateComponent},
};

#[derive(Clone)]
pub struct ComponentsRepository {
    pool: Pool<Postgres>,
}

impl ComponentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all components
    pub async fn list(&self) -> AppResult<Vec<Component>> {
        let rows = sqlx::query_as::<_, Component>("SELECT * FROM components ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get component by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Component> {
        sqlx::query_as::<_, Component>("SELECT * FROM components WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Component {} not found", id)))
    }

    /// Create component
    pub async fn create(
        &self,
        id: Uuid,
        specifications: &Specifications,
        data: &CreateComponent,
    ) -> AppResult<Component> {
        let row = sqlx::query_as::<_, Component>(
            r#"
            INSERT INTO components (
                id, name, component_type, subtype, manufacturer, model,
                serial_number, specifications
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.component_type)
        .bind(&data.subtype)
        .bind(&data.manufacturer)
        .bind(&data.model)
        .bind(&data.serial_number)
        .bind(Json(specifications))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update component
    pub async fn update(&self, id: Uuid, data: &UpdateComponent) -> AppResult<Component> {
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
        add_field!(data.component_type, "component_type");
        add_field!(data.subtype, "subtype");
        add_field!(data.manufacturer, "manufacturer");
        add_field!(data.model, "model");
        add_field!(data.serial_number, "serial_number");
        add_field!(data.specifications, "specifications");

        let query = format!(
            "UPDATE components SET {} WHERE id = '{}' RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Component>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.component_type);
        bind_field!(data.subtype);
        bind_field!(data.manufacturer);
        bind_field!(data.model);
        bind_field!(data.serial_number);
        if let Some(ref val) = data.specifications {
            builder = builder.bind(Json(val));
        }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Component {} not found", id)))
    }

    /// Delete component. Assets referencing it keep their dangling ids.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM components WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Component {} not found", id)));
        }
        Ok(())
    }
}
