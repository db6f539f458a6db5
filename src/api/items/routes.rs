//! Item store route configuration.

use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, ItemCreatedResponse, ItemResponse, ItemsResponse, MessageResponse,
};
use crate::api::{AppState, ErrorResponse, system};
use crate::db::{Item, ItemStore};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item Store API",
        version = "0.1.0",
        description = "In-memory item store"
    ),
    paths(
        system::health,
        handlers::root,
        handlers::list_items,
        handlers::create_item,
        handlers::get_item,
    ),
    components(
        schemas(
            system::HealthResponse,
            Item,
            ItemsResponse,
            ItemCreatedResponse,
            ItemResponse,
            MessageResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "items", description = "Item store endpoints")
    )
)]
pub struct ApiDoc;

/// Create the item store router with OpenAPI documentation
pub fn create_router(state: AppState<ItemStore>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(system::health))
        .route(
            "/items",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route("/items/", get(handlers::list_items).post(handlers::create_item))
        .route("/items/{item_id}", get(handlers::get_item))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .with_state(state)
}
