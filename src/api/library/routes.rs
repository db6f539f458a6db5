//! Library route configuration.

use axum::Router;
use axum::routing::get;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::{authors, books, borrows};
use super::{
    AuthorResponse, BookResponse, BorrowRecordResponse, CreateAuthorRequest, CreateBookRequest,
    CreateBorrowRecordRequest,
};
use crate::api::{AppState, ErrorResponse, system};
use crate::db::LibraryDatabase;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "0.1.0",
        description = "Books, authors and borrow records"
    ),
    paths(
        system::health,
        books::create_book,
        books::list_books,
        books::get_book,
        books::update_book,
        books::delete_book,
        authors::create_author,
        authors::list_authors,
        authors::get_author,
        authors::update_author,
        authors::delete_author,
        borrows::create_borrow_record,
        borrows::list_borrow_records,
        borrows::get_borrow_record,
        borrows::update_borrow_record,
        borrows::delete_borrow_record,
        borrows::return_book,
    ),
    components(
        schemas(
            system::HealthResponse,
            BookResponse,
            CreateBookRequest,
            AuthorResponse,
            CreateAuthorRequest,
            BorrowRecordResponse,
            CreateBorrowRecordRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "books", description = "Book management endpoints"),
        (name = "authors", description = "Author management endpoints"),
        (name = "borrow", description = "Borrowing and returning books")
    )
)]
pub struct ApiDoc;

/// Create the library router with OpenAPI documentation
pub fn create_router<D: LibraryDatabase + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    let system_routes = Router::new().route("/health", get(system::health));

    // Collections answer with and without the trailing slash
    let book_routes = routes!(D => {
        get "/books" => books::list_books,
        get "/books/" => books::list_books,
        post "/books" => books::create_book,
        post "/books/" => books::create_book,
        get "/books/{id}" => books::get_book,
        put "/books/{id}" => books::update_book,
        delete "/books/{id}" => books::delete_book,
    });

    let author_routes = routes!(D => {
        get "/authors" => authors::list_authors,
        get "/authors/" => authors::list_authors,
        post "/authors" => authors::create_author,
        post "/authors/" => authors::create_author,
        get "/authors/{id}" => authors::get_author,
        put "/authors/{id}" => authors::update_author,
        delete "/authors/{id}" => authors::delete_author,
    });

    let borrow_routes = routes!(D => {
        get "/borrow" => borrows::list_borrow_records,
        get "/borrow/" => borrows::list_borrow_records,
        post "/borrow" => borrows::create_borrow_record,
        post "/borrow/" => borrows::create_borrow_record,
        get "/borrow/{id}" => borrows::get_borrow_record,
        put "/borrow/{id}" => borrows::update_borrow_record,
        delete "/borrow/{id}" => borrows::delete_borrow_record,
        put "/borrow/{id}/return" => borrows::return_book,
    });

    system_routes
        .merge(book_routes)
        .merge(author_routes)
        .merge(borrow_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
