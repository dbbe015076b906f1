use serde::{Deserialize, Serialize};

/// A stored to-do item. The id is caller-supplied, never generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub task: String,
    pub summary: String,
}

/// Input for creating a task, as approved by the creation profile.
/// Both fields are present by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub task: String,
    pub summary: String,
}

/// Input for updating a task, as approved by the update profile.
/// `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub task: Option<String>,
    pub summary: Option<String>,
}

impl TaskChanges {
    pub fn is_empty(&self) -> bool {
        self.task.is_none() && self.summary.is_none()
    }
}
