//! Task handlers.

use axum::{Json, extract::State};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::api::{ApiError, ApiJson, ApiPath, ApiQuery, AppState, ErrorResponse, PageParams};
use crate::db::{
    NewTask, Page, Task, TaskManagerDatabase, TaskPriority, TaskQuery, TaskRepository, TaskStatus,
};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct TaskResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Write release notes")]
    pub title: String,
    #[schema(example = "Summarize the changes since the last release")]
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[schema(value_type = String, example = "2025-03-01T17:00:00")]
    pub due_date: NaiveDateTime,
    #[schema(example = 1)]
    pub project_id: i64,
    #[schema(example = 2)]
    pub assigned_to_id: Option<i64>,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description,
            status: t.status,
            priority: t.priority,
            due_date: t.due_date,
            project_id: t.project_id,
            assigned_to_id: t.assigned_to_id,
        }
    }
}

/// Create/replace task request DTO
///
/// Every field except `assigned_to_id` is required, on create and on replace.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    #[schema(example = "Write release notes")]
    pub title: String,
    #[schema(example = "Summarize the changes since the last release")]
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[schema(value_type = String, example = "2025-03-01T17:00:00")]
    pub due_date: NaiveDateTime,
    #[schema(example = 1)]
    pub project_id: i64,
    #[serde(default)]
    #[schema(example = 2)]
    pub assigned_to_id: Option<i64>,
}

impl From<CreateTaskRequest> for NewTask {
    fn from(req: CreateTaskRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            status: req.status,
            priority: req.priority,
            due_date: req.due_date,
            project_id: req.project_id,
            assigned_to_id: req.assigned_to_id,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTasksQuery {
    /// Number of rows to skip
    #[param(example = 0)]
    pub skip: Option<u32>,
    /// Maximum number of rows to return (default 100)
    #[param(example = 100)]
    pub limit: Option<u32>,
    /// Filter by status (TODO, IN_PROGRESS, DONE)
    pub status: Option<TaskStatus>,
    /// Filter by priority (LOW, MEDIUM, HIGH)
    pub priority: Option<TaskPriority>,
    /// Filter by project ID
    #[param(example = 1)]
    pub project_id: Option<i64>,
}

impl From<ListTasksQuery> for TaskQuery {
    fn from(q: ListTasksQuery) -> Self {
        let page: Page = PageParams {
            skip: q.skip,
            limit: q.limit,
        }
        .into();

        TaskQuery {
            page,
            status: q.status,
            priority: q.priority,
            project_id: q.project_id,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a new task
#[utoipa::path(
    post,
    path = "/tasks/",
    tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "Task created", body = TaskResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_task<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.db().tasks().create(&req.into()).await?;
    tracing::debug!(task_id = task.id, project_id = task.project_id, "task created");
    Ok(Json(TaskResponse::from(task)))
}

/// List tasks
///
/// Filters are exact matches combined with AND
#[utoipa::path(
    get,
    path = "/tasks/",
    tag = "tasks",
    params(ListTasksQuery),
    responses(
        (status = 200, description = "List of tasks", body = Vec<TaskResponse>),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_tasks<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiQuery(query): ApiQuery<ListTasksQuery>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = state.db().tasks().list(&query.into()).await?;
    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task found", body = TaskResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_task<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.db().tasks().get(id).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// Replace a task
#[utoipa::path(
    put,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "Task updated", body = TaskResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_task<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<CreateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.db().tasks().update(id, &req.into()).await?;
    Ok(Json(TaskResponse::from(task)))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "tasks",
    params(("id" = i64, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task deleted", body = TaskResponse),
        (status = 404, description = "Task not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_task<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<TaskResponse>, ApiError> {
    let task = state.db().tasks().delete(id).await?;
    Ok(Json(TaskResponse::from(task)))
}
