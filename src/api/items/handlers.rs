//! Item store handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::api::{ApiError, ApiJson, ApiPath, ApiQuery, AppState, ErrorResponse};
use crate::db::{Item, ItemStore};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Item store is running")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

#[derive(Serialize, ToSchema)]
pub struct ItemCreatedResponse {
    #[schema(example = "Item created successfully")]
    pub message: String,
    /// Position of the new item, usable with `GET /items/{item_id}`
    #[schema(example = 0)]
    pub item_id: usize,
    pub item: Item,
}

#[derive(Serialize, ToSchema)]
pub struct ItemResponse {
    pub item: Item,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListItemsQuery {
    /// Number of items to skip
    #[param(example = 0)]
    pub skip: Option<usize>,
    /// Maximum number of items to return (default: all)
    #[param(example = 10)]
    pub limit: Option<usize>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Liveness message
#[utoipa::path(
    get,
    path = "/",
    tag = "items",
    responses(
        (status = 200, description = "Service is running", body = MessageResponse)
    )
)]
#[instrument]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Item store is running".to_string(),
    })
}

/// List items
///
/// Returns items in insertion order
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    params(ListItemsQuery),
    responses(
        (status = 200, description = "Items in insertion order", body = ItemsResponse),
        (status = 400, description = "Invalid query", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_items(
    State(state): State<AppState<ItemStore>>,
    ApiQuery(query): ApiQuery<ListItemsQuery>,
) -> Json<ItemsResponse> {
    let items = state
        .db()
        .list(query.skip.unwrap_or(0), query.limit)
        .await;

    Json(ItemsResponse { items })
}

/// Create an item
///
/// Appends an item to the store
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = Item,
    responses(
        (status = 200, description = "Item created", body = ItemCreatedResponse),
        (status = 400, description = "Invalid item", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_item(
    State(state): State<AppState<ItemStore>>,
    ApiJson(item): ApiJson<Item>,
) -> Json<ItemCreatedResponse> {
    let (item_id, item) = state.db().push(item).await;
    tracing::debug!(item_id, "item created");

    Json(ItemCreatedResponse {
        message: "Item created successfully".to_string(),
        item_id,
        item,
    })
}

/// Get an item by position
///
/// Items are addressed by their 0-based position in the store
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(
        ("item_id" = i64, Path, description = "0-based item position")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_item(
    State(state): State<AppState<ItemStore>>,
    ApiPath(item_id): ApiPath<i64>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.db().get(item_id).await?;
    Ok(Json(ItemResponse { item }))
}
