use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::state::ApiState;
use todos_core::{validate, Task};
use todos_db::Error as DbError;

/// Body accepted by the create and update endpoints. Both fields are
/// optional at the wire level; the validation profile for the operation
/// decides what is actually required.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoPayload {
    pub task: Option<String>,
    pub summary: Option<String>,
}

/// Fields of a task as listed under its id key in the list response.
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoFields {
    pub task: String,
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List every stored todo as an object keyed by id.
pub async fn list_todos(
    State(state): State<ApiState>,
) -> Result<Json<BTreeMap<i64, TodoFields>>, (StatusCode, Json<MessageResponse>)> {
    match state.db.list_tasks().await {
        Ok(rows) => {
            let todos = rows
                .into_iter()
                .map(|row| {
                    (
                        row.id,
                        TodoFields {
                            task: row.task,
                            summary: row.summary,
                        },
                    )
                })
                .collect();
            Ok(Json(todos))
        }
        Err(e) => {
            tracing::error!("Failed to list tasks: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: format!("Failed to list tasks. Error: {}", e),
                }),
            ))
        }
    }
}

/// Fetch one todo by id.
///
/// The not-found payload here is the plain `{"error": ...}` object, not the
/// `{"message": ...}` form the mutating endpoints use.
pub async fn get_todo(
    State(state): State<ApiState>,
    Path(todo_id): Path<i64>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    match state.db.get_task(todo_id).await {
        Ok(Some(row)) => Ok(Json(row.into())),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Could not find task id" })),
        )),
        Err(e) => {
            tracing::error!("Failed to fetch task {}: {}", todo_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": format!("Failed to fetch task. Error: {}", e) })),
            ))
        }
    }
}

/// Create a todo under the id given in the path.
pub async fn create_todo(
    State(state): State<ApiState>,
    Path(todo_id): Path<i64>,
    Json(payload): Json<TodoPayload>,
) -> Result<(StatusCode, Json<MessageResponse>), (StatusCode, Json<MessageResponse>)> {
    let new_task = match validate::validate_create(payload.task, payload.summary) {
        Ok(new_task) => new_task,
        Err(e) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(MessageResponse {
                    message: e.to_string(),
                }),
            ))
        }
    };

    match state.db.create_task(todo_id, &new_task).await {
        Ok(()) => {
            tracing::info!("Created task {}", todo_id);
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse {
                    message: "Task successfully created".to_string(),
                }),
            ))
        }
        Err(DbError::TaskExists(_)) => Err((
            StatusCode::CONFLICT,
            Json(MessageResponse {
                message: "Task already exists".to_string(),
            }),
        )),
        Err(e) => {
            tracing::error!("Failed to create task {}: {}", todo_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: format!("Failed to create new task. Error: {}", e),
                }),
            ))
        }
    }
}

/// Update the task and/or summary of an existing todo and return its
/// post-update state.
pub async fn update_todo(
    State(state): State<ApiState>,
    Path(todo_id): Path<i64>,
    Json(payload): Json<TodoPayload>,
) -> Result<Json<Task>, (StatusCode, Json<MessageResponse>)> {
    let changes = match validate::validate_update(payload.task, payload.summary) {
        Ok(changes) => changes,
        Err(e) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(MessageResponse {
                    message: e.to_string(),
                }),
            ))
        }
    };

    match state.db.update_task(todo_id, &changes).await {
        Ok(row) => Ok(Json(row.into())),
        Err(DbError::TaskNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: "Task does not exist, impossible to update".to_string(),
            }),
        )),
        Err(e) => {
            tracing::error!("Failed to update task {}: {}", todo_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(MessageResponse {
                    message: format!("Failed to update task. Error: {}", e),
                }),
            ))
        }
    }
}

/// Delete a todo by id.
///
/// Not-found returns the plain `{"error": ...}` object; store failures use
/// the message form.
pub async fn delete_todo(
    State(state): State<ApiState>,
    Path(todo_id): Path<i64>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<Value>)> {
    match state.db.delete_task(todo_id).await {
        Ok(()) => {
            tracing::info!("Deleted task {}", todo_id);
            Ok(Json(MessageResponse {
                message: "Task successfully deleted".to_string(),
            }))
        }
        Err(DbError::TaskNotFound(_)) => Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Task with ID {} does not exist.", todo_id) })),
        )),
        Err(e) => {
            tracing::error!("Failed to delete task {}: {}", todo_id, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "message": format!("Failed to delete task. Error: {}", e) })),
            ))
        }
    }
}
