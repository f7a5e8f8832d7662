//! Maintenance tasks repository

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::enums::TaskStatus,
    models::task::{CreateTask, MaintenanceTask, UpdateTask},
};

#[derive(Clone)]
pub struct TasksRepository {
    pool: Pool<Postgres>,
}

impl TasksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all maintenance tasks, soonest first
    pub async fn list(&self) -> AppResult<Vec<MaintenanceTask>> {
        let rows = sqlx::query_as::<_, MaintenanceTask>(
            "SELECT * FROM maintenance_tasks ORDER BY scheduled_date",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get task by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceTask> {
        sqlx::query_as::<_, MaintenanceTask>("SELECT * FROM maintenance_tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", id)))
    }

    /// Create task
    pub async fn create(&self, id: Uuid, data: &CreateTask) -> AppResult<MaintenanceTask> {
        let row = sqlx::query_as::<_, MaintenanceTask>(
            r#"
            INSERT INTO maintenance_tasks (
                id, title, description, status, priority, assigned_to,
                asset_id, assembly_id, scheduled_date, recurring, next_occurrence
            )
            VALUES ($1, $2, $3, COALESCE($4, 'Scheduled'), COALESCE($5, 'Medium'),
                    $6, $7, $8, $9, COALESCE($10, 'None'), $11)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.status)
        .bind(data.priority)
        .bind(&data.assigned_to)
        .bind(data.asset_id)
        .bind(data.assembly_id)
        .bind(data.scheduled_date)
        .bind(data.recurring)
        .bind(data.next_occurrence)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update task
    pub async fn update(&self, id: Uuid, data: &UpdateTask) -> AppResult<MaintenanceTask> {
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

        add_field!(data.title, "title");
        add_field!(data.description, "description");
        add_field!(data.status, "status");
        add_field!(data.priority, "priority");
        add_field!(data.assigned_to, "assigned_to");
        add_field!(data.asset_id, "asset_id");
        add_field!(data.assembly_id, "assembly_id");
        add_field!(data.scheduled_date, "scheduled_date");
        add_field!(data.completed_date, "completed_date");
        add_field!(data.recurring, "recurring");
        add_field!(data.next_occurrence, "next_occurrence");

        let query = format!(
            "UPDATE maintenance_tasks SET {} WHERE id = '{}' RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, MaintenanceTask>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.title);
        bind_field!(data.description);
        bind_field!(data.status);
        bind_field!(data.priority);
        bind_field!(data.assigned_to);
        bind_field!(data.asset_id);
        bind_field!(data.assembly_id);
        bind_field!(data.scheduled_date);
        bind_field!(data.completed_date);
        bind_field!(data.recurring);
        bind_field!(data.next_occurrence);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Task {} not found", id)))
    }

    /// Mark a task completed. Always restamps completed_date, even when the
    /// task is already completed.
    pub async fn mark_completed(&self, id: Uuid, today: NaiveDate) -> AppResult<MaintenanceTask> {
        sqlx::query_as::<_, MaintenanceTask>(
            r#"
            UPDATE maintenance_tasks
            SET status = $1, completed_date = $2, updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(TaskStatus::Completed)
        .bind(today)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Task {} not found", id)))
    }

    /// Delete task
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Task {} not found", id)));
        }
        Ok(())
    }
}
