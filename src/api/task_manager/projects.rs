//! Project management handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::{ApiError, ApiJson, ApiPath, ApiQuery, AppState, ErrorResponse, PageParams};
use crate::db::{NewProject, Project, ProjectRepository, TaskManagerDatabase};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Project response DTO
#[derive(Serialize, ToSchema)]
pub struct ProjectResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Website relaunch")]
    pub name: String,
    #[schema(example = "Move the marketing site to the new stack")]
    pub description: String,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
        }
    }
}

/// Create/replace project request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[schema(example = "Website relaunch")]
    pub name: String,
    #[schema(example = "Move the marketing site to the new stack")]
    pub description: String,
}

impl From<CreateProjectRequest> for NewProject {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a new project
#[utoipa::path(
    post,
    path = "/projects/",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "Project created", body = ProjectResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_project<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state.db().projects().create(&req.into()).await?;
    Ok(Json(ProjectResponse::from(project)))
}

/// List projects
#[utoipa::path(
    get,
    path = "/projects/",
    tag = "projects",
    params(PageParams),
    responses(
        (status = 200, description = "List of projects", body = Vec<ProjectResponse>),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_projects<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiQuery(query): ApiQuery<PageParams>,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = state.db().projects().list(query.into()).await?;
    Ok(Json(projects.into_iter().map(ProjectResponse::from).collect()))
}

/// Get a project by ID
#[utoipa::path(
    get,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project found", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_project<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state.db().projects().get(id).await?;
    Ok(Json(ProjectResponse::from(project)))
}

/// Replace a project
#[utoipa::path(
    put,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project ID")),
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ProjectResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_project<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<CreateProjectRequest>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state.db().projects().update(id, &req.into()).await?;
    Ok(Json(ProjectResponse::from(project)))
}

/// Delete a project
///
/// Tasks that reference the project are not removed
#[utoipa::path(
    delete,
    path = "/projects/{id}",
    tag = "projects",
    params(("id" = i64, Path, description = "Project ID")),
    responses(
        (status = 200, description = "Project deleted", body = ProjectResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_project<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let project = state.db().projects().delete(id).await?;
    Ok(Json(ProjectResponse::from(project)))
}
