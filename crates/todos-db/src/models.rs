use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todos_core::Task;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TaskRow {
    pub id: i64,
    pub task: String,
    pub summary: String,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            task: row.task,
            summary: row.summary,
        }
    }
}
