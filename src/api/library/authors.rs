//! Author management handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::{ApiError, ApiJson, ApiPath, ApiQuery, AppState, ErrorResponse, PageParams};
use crate::db::{Author, AuthorRepository, LibraryDatabase, NewAuthor};

#[derive(Serialize, ToSchema)]
pub struct AuthorResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Ursula K. Le Guin")]
    pub name: String,
    #[schema(example = 1929)]
    pub birth_year: i32,
}

impl From<Author> for AuthorResponse {
    fn from(a: Author) -> Self {
        Self {
            id: a.id,
            name: a.name,
            birth_year: a.birth_year,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAuthorRequest {
    #[schema(example = "Ursula K. Le Guin")]
    pub name: String,
    #[schema(example = 1929)]
    pub birth_year: i32,
}

impl From<CreateAuthorRequest> for NewAuthor {
    fn from(req: CreateAuthorRequest) -> Self {
        Self {
            name: req.name,
            birth_year: req.birth_year,
        }
    }
}

#[utoipa::path(
    post,
    path = "/authors/",
    tag = "authors",
    request_body = CreateAuthorRequest,
    responses(
        (status = 200, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_author<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiJson(req): ApiJson<CreateAuthorRequest>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let author = state.db().authors().create(&req.into()).await?;
    Ok(Json(AuthorResponse::from(author)))
}

#[utoipa::path(
    get,
    path = "/authors/",
    tag = "authors",
    params(PageParams),
    responses(
        (status = 200, description = "List of authors", body = Vec<AuthorResponse>),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_authors<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiQuery(query): ApiQuery<PageParams>,
) -> Result<Json<Vec<AuthorResponse>>, ApiError> {
    let authors = state.db().authors().list(query.into()).await?;
    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author found", body = AuthorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_author<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let author = state.db().authors().get(id).await?;
    Ok(Json(AuthorResponse::from(author)))
}

#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body = CreateAuthorRequest,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_author<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<CreateAuthorRequest>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let author = state.db().authors().update(id, &req.into()).await?;
    Ok(Json(AuthorResponse::from(author)))
}

/// Delete an author. Books referencing the author are left in place.
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted", body = AuthorResponse),
        (status = 404, description = "Author not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_author<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<AuthorResponse>, ApiError> {
    let author = state.db().authors().delete(id).await?;
    Ok(Json(AuthorResponse::from(author)))
}
