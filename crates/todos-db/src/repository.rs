use crate::{models::TaskRow, Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use todos_core::{NewTask, TaskChanges};

#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create new database connection. The database file is created if it
    /// does not exist yet.
    pub async fn new(database_url: &str) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await?;

        Ok(Self { pool })
    }

    /// Initialize database schema
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY,
                task VARCHAR(200) NOT NULL,
                summary VARCHAR(500) NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get every stored task, in id order. Empty vec when none exist.
    pub async fn list_tasks(&self) -> Result<Vec<TaskRow>> {
        let records = sqlx::query_as::<_, TaskRow>("SELECT * FROM tasks ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Get task by ID
    pub async fn get_task(&self, id: i64) -> Result<Option<TaskRow>> {
        let record = sqlx::query_as::<_, TaskRow>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(record)
    }

    /// Insert a new task. The existence check and the insert share one
    /// transaction; an early return drops the transaction, which rolls back.
    pub async fn create_task(&self, id: i64, new: &NewTask) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, TaskRow>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            return Err(Error::TaskExists(id));
        }

        sqlx::query("INSERT INTO tasks (id, task, summary) VALUES (?, ?, ?)")
            .bind(id)
            .bind(&new.task)
            .bind(&new.summary)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Apply the non-`None` fields of `changes` and return the row as
    /// stored after the update.
    pub async fn update_task(&self, id: i64, changes: &TaskChanges) -> Result<TaskRow> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, TaskRow>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(Error::TaskNotFound(id))?;

        if !changes.is_empty() {
            let task = changes.task.as_deref().unwrap_or(&row.task);
            let summary = changes.summary.as_deref().unwrap_or(&row.summary);

            sqlx::query("UPDATE tasks SET task = ?, summary = ? WHERE id = ?")
                .bind(task)
                .bind(summary)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        // Re-read so the caller sees exactly what was committed.
        let updated = sqlx::query_as::<_, TaskRow>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    /// Delete task by ID
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, TaskRow>("SELECT * FROM tasks WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_none() {
            return Err(Error::TaskNotFound(id));
        }

        sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}
