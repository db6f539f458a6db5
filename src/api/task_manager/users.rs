//! User management handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::{ApiError, ApiJson, ApiPath, ApiQuery, AppState, ErrorResponse, PageParams};
use crate::db::{NewUser, TaskManagerDatabase, User, UserRepository};

/// User response DTO
#[derive(Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
            email: u.email,
        }
    }
}

/// Create/replace user request DTO
///
/// Username and email must both be unique.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
        }
    }
}

#[utoipa::path(
    post,
    path = "/users/",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid payload or duplicate username/email", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_user<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.db().users().create(&req.into()).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    get,
    path = "/users/",
    tag = "users",
    params(PageParams),
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_users<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiQuery(query): ApiQuery<PageParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.db().users().list(query.into()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.db().users().get(id).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Invalid payload or duplicate username/email", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_user<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.db().users().update(id, &req.into()).await?;
    Ok(Json(UserResponse::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user<D: TaskManagerDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.db().users().delete(id).await?;
    Ok(Json(UserResponse::from(user)))
}
