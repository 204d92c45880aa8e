/// Task resource endpoints
///
/// This module provides the CRUD surface over Task records:
///
/// # Endpoints
///
/// - `POST /tasks` - Create a task
/// - `GET /tasks` - List tasks with optional filters and pagination
/// - `GET /tasks/:id` - Fetch a single task
/// - `PUT /tasks/:id` - Update a task's text and/or completion flag
/// - `DELETE /tasks/:id` - Delete a task
///
/// Request bodies deserialize into explicit per-endpoint structs with
/// presence checks before use; the listing's optional filters combine into
/// a single [`TaskFilter`] passed to the query builder.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tasktrack_shared::models::task::{
    CreateTask, Task, TaskFilter, TaskPage, TaskStatus, UpdateTask, PAGE_SIZE,
};
use validator::Validate;

/// Simple acknowledgment body returned by the write operations
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable acknowledgment
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Create task request
///
/// All fields arrive optional so that presence can be checked explicitly;
/// `username` and `email` must be present and non-empty.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task owner name (required, non-empty)
    pub username: Option<String>,

    /// Task owner email (required, non-empty)
    pub email: Option<String>,

    /// Optional task text
    #[validate(length(max = 500, message = "text must be at most 500 characters"))]
    pub text: Option<String>,
}

/// Update task request
///
/// Both fields are optional; see the update handler for the replacement
/// rules.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    /// New task text
    #[validate(length(max = 500, message = "text must be at most 500 characters"))]
    pub text: Option<String>,

    /// New completion flag
    pub completed: Option<bool>,
}

/// Query parameters accepted by the task listing
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Completion filter: `completed`, `inprogress`, or `all` (default)
    #[serde(default)]
    pub complete: TaskStatus,

    /// Exact match on username
    pub username: Option<String>,

    /// Exact match on email
    pub email: Option<String>,

    /// 1-based page number (default 1)
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl ListTasksQuery {
    /// Collapses the provided parameters into the model-level filter
    fn filter(&self) -> TaskFilter {
        TaskFilter {
            complete: self.complete.completion_filter(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Single-task view returned by `GET /tasks/:id`
///
/// The completion flag is deliberately absent from this view; it is only
/// reported by the listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskDetailResponse {
    /// Task id
    pub id: i64,

    /// Task owner name
    pub username: String,

    /// Task owner email
    pub email: String,

    /// Task text
    pub text: Option<String>,
}

/// Create task handler
///
/// # Endpoint
///
/// ```text
/// POST /tasks
/// Content-Type: application/json
///
/// {
///   "username": "bob",
///   "email": "b@x.com",
///   "text": "buy milk"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: `username` or `email` absent/empty, or `text`
///   longer than 500 characters
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    req.validate()?;

    let username = req
        .username
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::BadRequest("username and email are required".to_string()))?;
    let email = req
        .email
        .as_deref()
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::BadRequest("username and email are required".to_string()))?;

    let task = Task::create(
        &state.db,
        CreateTask {
            username: username.to_string(),
            email: email.to_string(),
            text: req.text,
        },
    )
    .await?;

    tracing::info!(task_id = task.id, "Task created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Task created successfully")),
    ))
}

/// List tasks handler
///
/// # Endpoint
///
/// ```text
/// GET /tasks?complete=inprogress&username=bob&page=2
/// ```
///
/// # Response
///
/// ```json
/// {
///   "tasks": [{"id": 4, "username": "bob", "email": "b@x.com",
///              "text": "buy milk", "complete": false}],
///   "total_pages": 2,
///   "total_items": 4,
///   "current_page": 2,
///   "has_prev": true,
///   "has_next": false
/// }
/// ```
///
/// Only the provided filters constrain the result. A page past the end
/// yields an empty `tasks` list, not an error.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<TaskPage>> {
    let page = Task::paginate(&state.db, &query.filter(), query.page, PAGE_SIZE).await?;

    Ok(Json(page))
}

/// Get task handler
///
/// # Endpoint
///
/// ```text
/// GET /tasks/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no task with this id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TaskDetailResponse>> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(TaskDetailResponse {
        id: task.id,
        username: task.username,
        email: task.email,
        text: task.text,
    }))
}

/// Update task handler
///
/// Replaces `text` only when the new value is non-empty, and sets the
/// completion flag only when `completed` is `true`; a `false` value is a
/// no-op, so the flag cannot be cleared here.
///
/// # Endpoint
///
/// ```text
/// PUT /tasks/:id
/// Content-Type: application/json
///
/// {
///   "text": "buy oat milk",
///   "completed": true
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: `text` longer than 500 characters
/// - `404 Not Found`: no task with this id
pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<MessageResponse>> {
    req.validate()?;

    let updated = Task::update(
        &state.db,
        id,
        UpdateTask {
            text: req.text,
            completed: req.completed,
        },
    )
    .await?;

    if updated.is_none() {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    tracing::info!(task_id = id, "Task updated");

    Ok(Json(MessageResponse::new("Task updated successfully")))
}

/// Delete task handler
///
/// # Endpoint
///
/// ```text
/// DELETE /tasks/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: no task with this id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = Task::delete(&state.db, id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    tracing::info!(task_id = id, "Task deleted");

    Ok(Json(MessageResponse::new("Task deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults() {
        let query: ListTasksQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(query.complete, TaskStatus::All);
        assert_eq!(query.page, 1);
        assert!(query.username.is_none());
        assert!(query.email.is_none());
    }

    #[test]
    fn test_list_query_filter() {
        let query: ListTasksQuery =
            serde_urlencoded::from_str("complete=completed&username=bob&page=2").unwrap();
        assert_eq!(query.page, 2);

        let filter = query.filter();
        assert_eq!(filter.complete, Some(true));
        assert_eq!(filter.username.as_deref(), Some("bob"));
        assert!(filter.email.is_none());
    }

    #[test]
    fn test_list_query_rejects_unknown_status() {
        assert!(serde_urlencoded::from_str::<ListTasksQuery>("complete=bogus").is_err());
    }

    #[test]
    fn test_text_length_validation() {
        let req = CreateTaskRequest {
            username: Some("bob".to_string()),
            email: Some("b@x.com".to_string()),
            text: Some("x".repeat(501)),
        };
        assert!(req.validate().is_err());

        let req = CreateTaskRequest {
            username: Some("bob".to_string()),
            email: Some("b@x.com".to_string()),
            text: Some("x".repeat(500)),
        };
        assert!(req.validate().is_ok());
    }
}
