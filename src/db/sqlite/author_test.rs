//! Tests for SqliteAuthorRepository.

use crate::db::{
    AuthorRepository, DbError, LibraryDatabase, NewAuthor, Page, SqliteLibraryDatabase,
};

async fn setup_db() -> SqliteLibraryDatabase {
    let db = SqliteLibraryDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn author(name: &str, birth_year: i32) -> NewAuthor {
    NewAuthor {
        name: name.to_string(),
        birth_year,
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_author() {
    let db = setup_db().await;
    let repo = db.authors();

    let created = repo
        .create(&author("Ursula K. Le Guin", 1929))
        .await
        .expect("Create should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved, created);
    assert_eq!(retrieved.name, "Ursula K. Le Guin");
    assert_eq!(retrieved.birth_year, 1929);
}

#[tokio::test(flavor = "multi_thread")]
async fn get_nonexistent_author_returns_not_found() {
    let db = setup_db().await;

    let result = db.authors().get(999).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_authors_in_insertion_order_with_page() {
    let db = setup_db().await;
    let repo = db.authors();

    for (name, year) in [("A", 1900), ("B", 1910), ("C", 1920)] {
        repo.create(&author(name, year))
            .await
            .expect("Create should succeed");
    }

    let all = repo.list(Page::default()).await.expect("List should succeed");
    let names: Vec<_> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let page = repo
        .list(Page { skip: 1, limit: 1 })
        .await
        .expect("List should succeed");
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "B");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_author_replaces_fields() {
    let db = setup_db().await;
    let repo = db.authors();

    let created = repo
        .create(&author("Orig", 1950))
        .await
        .expect("Create should succeed");

    let updated = repo
        .update(created.id, &author("Renamed", 1951))
        .await
        .expect("Update should succeed");
    assert_eq!(updated.id, created.id);

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved.name, "Renamed");
    assert_eq!(retrieved.birth_year, 1951);
}

#[tokio::test(flavor = "multi_thread")]
async fn update_missing_author_returns_not_found() {
    let db = setup_db().await;

    let result = db.authors().update(42, &author("Nobody", 2000)).await;
    assert!(matches!(result, Err(DbError::NotFound { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_author_returns_row_and_removes_it() {
    let db = setup_db().await;
    let repo = db.authors();

    let created = repo
        .create(&author("Gone", 1900))
        .await
        .expect("Create should succeed");

    let deleted = repo.delete(created.id).await.expect("Delete should succeed");
    assert_eq!(deleted, created);

    assert!(matches!(
        repo.get(created.id).await,
        Err(DbError::NotFound { .. })
    ));
    assert!(matches!(
        repo.delete(created.id).await,
        Err(DbError::NotFound { .. })
    ));
}
