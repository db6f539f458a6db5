//! Integration tests for the book endpoints.

use axum::Router;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::api::test_support::{send, send_raw};
use crate::api::{AppState, library};
use crate::db::{LibraryDatabase, SqliteLibraryDatabase};

async fn test_app() -> Router {
    let db = SqliteLibraryDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    library::create_router(AppState::new(db))
}

fn book(title: &str, isbn: &str) -> Value {
    json!({
        "title": title,
        "isbn": isbn,
        "publication_year": 1969,
        "author_id": 1
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_book() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/books/",
        Some(book("The Left Hand of Darkness", "978-0441478125")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["title"], "The Left Hand of Darkness");
    assert_eq!(created["isbn"], "978-0441478125");
    assert_eq!(created["publication_year"], 1969);
    assert_eq!(created["author_id"], 1);

    let id = created["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn collection_works_without_trailing_slash() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/books", Some(book("A", "isbn-a"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_isbn_is_400() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/books/", Some(book("First", "dup"))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/books/", Some(book("Second", "dup"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string());

    let (_, list) = send(&app, "GET", "/books/", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn list_books_pages_in_id_order() {
    let app = test_app().await;
    for n in 0..5 {
        send(
            &app,
            "POST",
            "/books/",
            Some(book(&format!("Book {n}"), &format!("isbn-{n}"))),
        )
        .await;
    }

    let (status, body) = send(&app, "GET", "/books/?skip=1&limit=2", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, vec!["Book 1", "Book 2"]);

    let (_, body) = send(&app, "GET", "/books/?skip=10", None).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_paging_params_are_400() {
    let app = test_app().await;

    let (status, _) = send(&app, "GET", "/books/?limit=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/books/?skip=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_all_fields() {
    let app = test_app().await;
    let (_, created) = send(&app, "POST", "/books/", Some(book("Old", "isbn-old"))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/books/{id}"),
        Some(json!({
            "title": "New",
            "isbn": "isbn-new",
            "publication_year": 2001,
            "author_id": 7
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id);
    assert_eq!(updated["title"], "New");
    assert_eq!(updated["isbn"], "isbn-new");
    assert_eq!(updated["publication_year"], 2001);
    assert_eq!(updated["author_id"], 7);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_book_is_404() {
    let app = test_app().await;

    let (status, body) = send(&app, "PUT", "/books/42", Some(book("X", "x"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Book not found");
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_book_then_404() {
    let app = test_app().await;
    let (_, created) = send(&app, "POST", "/books/", Some(book("Gone", "isbn-gone"))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, deleted) = send(&app, "DELETE", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, created);

    let (status, body) = send(&app, "GET", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Book not found");

    let (status, _) = send(&app, "DELETE", &format!("/books/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_payloads_are_400() {
    let app = test_app().await;

    let (status, _) = send(&app, "POST", "/books/", Some(json!({"title": "No ISBN"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_raw(&app, "POST", "/books/", "{").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/books/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
