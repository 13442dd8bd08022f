//! Task API endpoints
//!
//! RESTful API for task CRUD operations over the flat-file store. Every
//! mutating handler runs the validation gate first, then reads the whole
//! collection, computes the new collection, and writes it back. There is no
//! coordination between concurrent requests; see the store for the
//! last-write-wins caveat.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};

use tp_core::task::{Task, TaskDraft, TaskPatch, TaskStore};
use tp_core::Error;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn error_reply(e: Error) -> ErrorReply {
    let (status, error) = match e {
        Error::TaskNotFound(_) => (StatusCode::NOT_FOUND, "Task not found".to_string()),
        Error::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
    };
    (status, Json(ErrorResponse { error }))
}

/// GET /tasks - List all tasks
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ErrorReply> {
    let tasks = state.task_store().read_all().await.map_err(error_reply)?;
    Ok(Json(tasks))
}

/// GET /tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, ErrorReply> {
    let tasks = state.task_store().read_all().await.map_err(error_reply)?;
    let task = tasks
        .into_iter()
        .find(|t| t.id == id)
        .ok_or_else(|| error_reply(Error::TaskNotFound(id)))?;

    Ok(Json(task))
}

/// POST /tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<(StatusCode, Json<Task>), ErrorReply> {
    let draft = TaskDraft::from_payload(payload).map_err(error_reply)?;

    let mut tasks = state.task_store().read_all().await.map_err(error_reply)?;
    let task = Task::new(draft);
    tasks.push(task.clone());
    state
        .task_store()
        .write_all(&tasks)
        .await
        .map_err(error_reply)?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/:id - Update a task (field-level merge)
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Map<String, Value>>,
) -> Result<Json<Task>, ErrorReply> {
    let patch = TaskPatch::from_payload(payload).map_err(error_reply)?;

    let mut tasks = state.task_store().read_all().await.map_err(error_reply)?;
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| error_reply(Error::TaskNotFound(id)))?;
    task.apply(patch);
    let updated = task.clone();
    state
        .task_store()
        .write_all(&tasks)
        .await
        .map_err(error_reply)?;

    Ok(Json(updated))
}

/// DELETE /tasks/:id - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ErrorReply> {
    let mut tasks = state.task_store().read_all().await.map_err(error_reply)?;
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    if tasks.len() == before {
        return Err(error_reply(Error::TaskNotFound(id)));
    }
    state
        .task_store()
        .write_all(&tasks)
        .await
        .map_err(error_reply)?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
