//! Assemblies repository: assembly rows plus the assembly_assets join table.
//!
//! The persisted relation is asset-id-only; member names and types are
//! resolved against the asset directory at read time. Updates fully replace
//! the join rows (delete then reinsert) inside one transaction, so no reader
//! can observe the empty window between the two statements.

use chrono::Utc;
use std::collections::HashMap;
use uuid::Uuid;

use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::assembly::{Assembly, AssemblyComponent, CreateAssembly, UpdateAssembly},
};

#[derive(Clone)]
pub struct AssembliesRepository {
    pool: Pool<Postgres>,
}

impl AssembliesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all assemblies with their resolved component lists.
    ///
    /// Orphaned join rows (asset id with no matching asset) are never hidden:
    /// they appear with a synthesized "Component <id>" placeholder.
    pub async fn list(&self) -> AppResult<Vec<Assembly>> {
        let mut assemblies =
            sqlx::query_as::<_, Assembly>("SELECT * FROM assemblies ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        let join_rows = sqlx::query(
            "SELECT assembly_id, asset_id FROM assembly_assets ORDER BY assembly_id, position",
        )
        .fetch_all(&self.pool)
        .await?;

        let asset_ids: Vec<Uuid> = join_rows
            .iter()
            .map(|row| row.get::<Uuid, _>("asset_id"))
            .collect();
        let directory = self.asset_directory(&asset_ids).await?;

        let mut members: HashMap<Uuid, Vec<AssemblyComponent>> = HashMap::new();
        for row in &join_rows {
            let assembly_id: Uuid = row.get("assembly_id");
            let asset_id: Uuid = row.get("asset_id");
            members
                .entry(assembly_id)
                .or_default()
                .push(resolve_member(asset_id, &directory));
        }

        for assembly in &mut assemblies {
            assembly.components = members.remove(&assembly.id).unwrap_or_default();
        }

        Ok(assemblies)
    }

    /// Get one assembly with its resolved component list
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Assembly> {
        let mut assembly =
            sqlx::query_as::<_, Assembly>("SELECT * FROM assemblies WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Assembly {} not found", id)))?;

        let asset_ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT asset_id FROM assembly_assets WHERE assembly_id = $1 ORDER BY position",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let directory = self.asset_directory(&asset_ids).await?;
        assembly.components = asset_ids
            .into_iter()
            .map(|asset_id| resolve_member(asset_id, &directory))
            .collect();

        Ok(assembly)
    }

    /// Create assembly and its join rows atomically
    pub async fn create(&self, id: Uuid, data: &CreateAssembly) -> AppResult<Assembly> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO assemblies (id, name, description, status, location,
                                    last_maintenance, next_maintenance)
            VALUES ($1, $2, $3, COALESCE($4, 'Active'), $5, $6, $7)
            "#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.status)
        .bind(&data.location)
        .bind(data.last_maintenance)
        .bind(data.next_maintenance)
        .execute(&mut *tx)
        .await?;

        insert_join_rows(&mut tx, id, &data.asset_ids).await?;
        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Update assembly fields and fully replace its join rows.
    ///
    /// All existing join rows are deleted and the new set reinserted; no
    /// incremental diff is computed.
    pub async fn update(&self, id: Uuid, data: &UpdateAssembly) -> AppResult<Assembly> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

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
        add_field!(data.description, "description");
        add_field!(data.status, "status");
        add_field!(data.location, "location");
        add_field!(data.last_maintenance, "last_maintenance");
        add_field!(data.next_maintenance, "next_maintenance");

        let query = format!(
            "UPDATE assemblies SET {} WHERE id = '{}'",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.description);
        bind_field!(data.status);
        bind_field!(data.location);
        bind_field!(data.last_maintenance);
        bind_field!(data.next_maintenance);

        let result = builder.execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Assembly {} not found", id)));
        }

        sqlx::query("DELETE FROM assembly_assets WHERE assembly_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        insert_join_rows(&mut tx, id, &data.asset_ids).await?;

        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Delete assembly. Join rows go first so they can never outlive the
    /// parent row.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM assembly_assets WHERE assembly_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM assemblies WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Assembly {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }

    /// Load id/name/type for the referenced assets
    async fn asset_directory(
        &self,
        asset_ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, (String, String)>> {
        if asset_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let rows = sqlx::query("SELECT id, name, asset_type FROM assets WHERE id = ANY($1)")
            .bind(asset_ids)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    row.get::<Uuid, _>("id"),
                    (row.get::<String, _>("name"), row.get::<String, _>("asset_type")),
                )
            })
            .collect())
    }
}

/// Resolve one join row against the asset directory, synthesizing a
/// placeholder for orphaned links.
fn resolve_member(
    asset_id: Uuid,
    directory: &HashMap<Uuid, (String, String)>,
) -> AssemblyComponent {
    match directory.get(&asset_id) {
        Some((name, asset_type)) => AssemblyComponent {
            id: asset_id,
            name: name.clone(),
            asset_type: asset_type.clone(),
        },
        None => AssemblyComponent {
            id: asset_id,
            name: format!("Component {}", asset_id),
            asset_type: "Unknown".to_string(),
        },
    }
}

async fn insert_join_rows(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    assembly_id: Uuid,
    asset_ids: &[Uuid],
) -> AppResult<()> {
    for (position, asset_id) in asset_ids.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO assembly_assets (assembly_id, asset_id, position)
            VALUES ($1, $2, $3)
            ON CONFLICT (assembly_id, asset_id) DO UPDATE SET position = EXCLUDED.position
            "#,
        )
        .bind(assembly_id)
        .bind(asset_id)
        .bind(position as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_member_placeholder_for_orphan() {
        let id = Uuid::new_v4();
        let member = resolve_member(id, &HashMap::new());
        assert_eq!(member.name, format!("Component {}", id));
        assert_eq!(member.asset_type, "Unknown");
        assert_eq!(member.id, id);
    }

    #[test]
    fn test_resolve_member_live_join() {
        let id = Uuid::new_v4();
        let mut directory = HashMap::new();
        directory.insert(id, ("Dell XPS 15".to_string(), "Laptop".to_string()));
        let member = resolve_member(id, &directory);
        assert_eq!(member.name, "Dell XPS 15");
        assert_eq!(member.asset_type, "Laptop");
    }
}
