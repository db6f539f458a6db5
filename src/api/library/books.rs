//! Book management handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::{ApiError, ApiJson, ApiPath, ApiQuery, AppState, ErrorResponse, PageParams};
use crate::db::{Book, BookRepository, LibraryDatabase, NewBook};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Book response DTO
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "The Left Hand of Darkness")]
    pub title: String,
    #[schema(example = "978-0441478125")]
    pub isbn: String,
    #[schema(example = 1969)]
    pub publication_year: i32,
    #[schema(example = 1)]
    pub author_id: i64,
}

impl From<Book> for BookResponse {
    fn from(b: Book) -> Self {
        Self {
            id: b.id,
            title: b.title,
            isbn: b.isbn,
            publication_year: b.publication_year,
            author_id: b.author_id,
        }
    }
}

/// Create/replace book request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    #[schema(example = "The Left Hand of Darkness")]
    pub title: String,
    /// Must be unique across all books
    #[schema(example = "978-0441478125")]
    pub isbn: String,
    #[schema(example = 1969)]
    pub publication_year: i32,
    #[schema(example = 1)]
    pub author_id: i64,
}

impl From<CreateBookRequest> for NewBook {
    fn from(req: CreateBookRequest) -> Self {
        Self {
            title: req.title,
            isbn: req.isbn,
            publication_year: req.publication_year,
            author_id: req.author_id,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Create a new book
#[utoipa::path(
    post,
    path = "/books/",
    tag = "books",
    request_body = CreateBookRequest,
    responses(
        (status = 200, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid payload or duplicate ISBN", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_book<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiJson(req): ApiJson<CreateBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.db().books().create(&req.into()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// List books
///
/// Returns books in insertion order, bounded by skip/limit
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    params(PageParams),
    responses(
        (status = 200, description = "List of books", body = Vec<BookResponse>),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_books<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiQuery(query): ApiQuery<PageParams>,
) -> Result<Json<Vec<BookResponse>>, ApiError> {
    let books = state.db().books().list(query.into()).await?;
    Ok(Json(books.into_iter().map(BookResponse::from).collect()))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book found", body = BookResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_book<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.db().books().get(id).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Replace a book
///
/// All fields are replaced; there is no partial update
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = CreateBookRequest,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Invalid payload or duplicate ISBN", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_book<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<CreateBookRequest>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.db().books().update(id, &req.into()).await?;
    Ok(Json(BookResponse::from(book)))
}

/// Delete a book
///
/// Returns the deleted book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = BookResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_book<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BookResponse>, ApiError> {
    let book = state.db().books().delete(id).await?;
    Ok(Json(BookResponse::from(book)))
}
