pub mod task;
pub mod validate;
pub mod error;

// Re-exports
pub use task::{NewTask, Task, TaskChanges};
pub use validate::{validate_create, validate_update, MAX_SUMMARY_LEN, MAX_TASK_LEN};
pub use error::{Error, Result};
