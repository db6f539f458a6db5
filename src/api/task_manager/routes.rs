//! Task manager route configuration.

use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::{
    CreateProjectRequest, CreateTaskRequest, CreateUserRequest, ProjectResponse, TaskResponse,
    UserResponse,
};
use super::{projects, tasks, users};
use crate::api::{AppState, ErrorResponse, system};
use crate::db::{TaskManagerDatabase, TaskPriority, TaskStatus};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Manager API",
        version = "0.1.0",
        description = "Users, projects and tasks"
    ),
    paths(
        system::health,
        users::create_user,
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        projects::create_project,
        projects::list_projects,
        projects::get_project,
        projects::update_project,
        projects::delete_project,
        tasks::create_task,
        tasks::list_tasks,
        tasks::get_task,
        tasks::update_task,
        tasks::delete_task,
    ),
    components(
        schemas(
            system::HealthResponse,
            UserResponse,
            CreateUserRequest,
            ProjectResponse,
            CreateProjectRequest,
            TaskResponse,
            CreateTaskRequest,
            TaskStatus,
            TaskPriority,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "projects", description = "Project management endpoints"),
        (name = "tasks", description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the task manager router with OpenAPI documentation
pub fn create_router<D: TaskManagerDatabase + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let system_routes = Router::new().route("/health", get(system::health));

    // Collections answer with and without the trailing slash
    let user_routes = routes!(D => {
        get "/users" => users::list_users,
        get "/users/" => users::list_users,
        post "/users" => users::create_user,
        post "/users/" => users::create_user,
        get "/users/{id}" => users::get_user,
        put "/users/{id}" => users::update_user,
        delete "/users/{id}" => users::delete_user,
    });

    let project_routes = routes!(D => {
        get "/projects" => projects::list_projects,
        get "/projects/" => projects::list_projects,
        post "/projects" => projects::create_project,
        post "/projects/" => projects::create_project,
        get "/projects/{id}" => projects::get_project,
        put "/projects/{id}" => projects::update_project,
        delete "/projects/{id}" => projects::delete_project,
    });

    let task_routes = routes!(D => {
        get "/tasks" => tasks::list_tasks,
        get "/tasks/" => tasks::list_tasks,
        post "/tasks" => tasks::create_task,
        post "/tasks/" => tasks::create_task,
        get "/tasks/{id}" => tasks::get_task,
        put "/tasks/{id}" => tasks::update_task,
        delete "/tasks/{id}" => tasks::delete_task,
    });

    system_routes
        .merge(user_routes)
        .merge(project_routes)
        .merge(task_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
