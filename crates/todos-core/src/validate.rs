use crate::error::{Error, Result};
use crate::task::{NewTask, TaskChanges};

pub const MAX_TASK_LEN: usize = 200;
pub const MAX_SUMMARY_LEN: usize = 500;

/// Creation profile: `task` and `summary` are both required.
pub fn validate_create(task: Option<String>, summary: Option<String>) -> Result<NewTask> {
    let task = task.ok_or(Error::MissingField("Task"))?;
    let summary = summary.ok_or(Error::MissingField("summary"))?;

    check_len("Task", &task, MAX_TASK_LEN)?;
    check_len("summary", &summary, MAX_SUMMARY_LEN)?;

    Ok(NewTask { task, summary })
}

/// Update profile: both fields optional. An empty string counts as
/// "no update" and leaves the stored value untouched.
pub fn validate_update(task: Option<String>, summary: Option<String>) -> Result<TaskChanges> {
    let task = task.filter(|t| !t.is_empty());
    let summary = summary.filter(|s| !s.is_empty());

    if let Some(ref t) = task {
        check_len("Task", t, MAX_TASK_LEN)?;
    }
    if let Some(ref s) = summary {
        check_len("summary", s, MAX_SUMMARY_LEN)?;
    }

    Ok(TaskChanges { task, summary })
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<()> {
    if value.chars().count() > max {
        return Err(Error::FieldTooLong { field, max });
    }
    Ok(())
}
