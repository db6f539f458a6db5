//! Borrow record handlers, including the book return operation.

use axum::{Json, extract::State};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::{ApiError, ApiJson, ApiPath, ApiQuery, AppState, ErrorResponse, PageParams};
use crate::db::{BorrowRecord, BorrowRepository, LibraryDatabase, NewBorrowRecord};

// =============================================================================
// DTOs
// =============================================================================

/// Borrow record response DTO
#[derive(Serialize, ToSchema)]
pub struct BorrowRecordResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 1)]
    pub book_id: i64,
    #[schema(example = "Ada Lovelace")]
    pub borrower_name: String,
    /// Set by the server when the record is created
    #[schema(value_type = String, example = "2025-01-01T10:00:00")]
    pub borrow_date: NaiveDateTime,
    /// Null until the book is returned
    #[schema(value_type = Option<String>, example = "2025-01-15T16:30:00")]
    pub return_date: Option<NaiveDateTime>,
}

impl From<BorrowRecord> for BorrowRecordResponse {
    fn from(r: BorrowRecord) -> Self {
        Self {
            id: r.id,
            book_id: r.book_id,
            borrower_name: r.borrower_name,
            borrow_date: r.borrow_date,
            return_date: r.return_date,
        }
    }
}

/// Create/replace borrow record request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBorrowRecordRequest {
    #[schema(example = 1)]
    pub book_id: i64,
    #[schema(example = "Ada Lovelace")]
    pub borrower_name: String,
}

impl From<CreateBorrowRecordRequest> for NewBorrowRecord {
    fn from(req: CreateBorrowRecordRequest) -> Self {
        Self {
            book_id: req.book_id,
            borrower_name: req.borrower_name,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Borrow a book
///
/// Creates a borrow record stamped with the current time
#[utoipa::path(
    post,
    path = "/borrow/",
    tag = "borrow",
    request_body = CreateBorrowRecordRequest,
    responses(
        (status = 200, description = "Borrow record created", body = BorrowRecordResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_borrow_record<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiJson(req): ApiJson<CreateBorrowRecordRequest>,
) -> Result<Json<BorrowRecordResponse>, ApiError> {
    let record = state.db().borrows().create(&req.into()).await?;
    Ok(Json(BorrowRecordResponse::from(record)))
}

/// List borrow records
#[utoipa::path(
    get,
    path = "/borrow/",
    tag = "borrow",
    params(PageParams),
    responses(
        (status = 200, description = "List of borrow records", body = Vec<BorrowRecordResponse>),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_borrow_records<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiQuery(query): ApiQuery<PageParams>,
) -> Result<Json<Vec<BorrowRecordResponse>>, ApiError> {
    let records = state.db().borrows().list(query.into()).await?;
    Ok(Json(
        records
            .into_iter()
            .map(BorrowRecordResponse::from)
            .collect(),
    ))
}

/// Get a borrow record by ID
#[utoipa::path(
    get,
    path = "/borrow/{id}",
    tag = "borrow",
    params(("id" = i64, Path, description = "Borrow record ID")),
    responses(
        (status = 200, description = "Borrow record found", body = BorrowRecordResponse),
        (status = 404, description = "Borrow record not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_borrow_record<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BorrowRecordResponse>, ApiError> {
    let record = state.db().borrows().get(id).await?;
    Ok(Json(BorrowRecordResponse::from(record)))
}

/// Replace a borrow record
///
/// Replaces book and borrower; borrow and return dates are kept
#[utoipa::path(
    put,
    path = "/borrow/{id}",
    tag = "borrow",
    params(("id" = i64, Path, description = "Borrow record ID")),
    request_body = CreateBorrowRecordRequest,
    responses(
        (status = 200, description = "Borrow record updated", body = BorrowRecordResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Borrow record not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_borrow_record<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(req): ApiJson<CreateBorrowRecordRequest>,
) -> Result<Json<BorrowRecordResponse>, ApiError> {
    let record = state.db().borrows().update(id, &req.into()).await?;
    Ok(Json(BorrowRecordResponse::from(record)))
}

/// Delete a borrow record
#[utoipa::path(
    delete,
    path = "/borrow/{id}",
    tag = "borrow",
    params(("id" = i64, Path, description = "Borrow record ID")),
    responses(
        (status = 200, description = "Borrow record deleted", body = BorrowRecordResponse),
        (status = 404, description = "Borrow record not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_borrow_record<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BorrowRecordResponse>, ApiError> {
    let record = state.db().borrows().delete(id).await?;
    Ok(Json(BorrowRecordResponse::from(record)))
}

/// Return a borrowed book
///
/// Stamps the return date. A record can only be returned once.
#[utoipa::path(
    put,
    path = "/borrow/{id}/return",
    tag = "borrow",
    params(("id" = i64, Path, description = "Borrow record ID")),
    responses(
        (status = 200, description = "Book returned", body = BorrowRecordResponse),
        (status = 400, description = "Book already returned", body = ErrorResponse),
        (status = 404, description = "Borrow record not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn return_book<D: LibraryDatabase>(
    State(state): State<AppState<D>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<BorrowRecordResponse>, ApiError> {
    let record = state.db().borrows().mark_returned(id).await?;
    tracing::info!(record_id = record.id, book_id = record.book_id, "book returned");
    Ok(Json(BorrowRecordResponse::from(record)))
}
