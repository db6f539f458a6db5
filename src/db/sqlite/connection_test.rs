//! Tests for SQLite database connection and migrations.

use crate::db::{LibraryDatabase, SqliteLibraryDatabase, SqliteTaskManagerDatabase, TaskManagerDatabase};

async fn table_names(pool: &sqlx::SqlitePool) -> Vec<String> {
    sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .fetch_all(pool)
        .await
        .expect("Query should succeed")
}

#[tokio::test(flavor = "multi_thread")]
async fn library_migrate_creates_all_tables() {
    let db = SqliteLibraryDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    let tables = table_names(db.pool()).await;
    for table in ["_sqlx_migrations", "authors", "books", "borrow_records"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn task_manager_migrate_creates_all_tables() {
    let db = SqliteTaskManagerDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    let tables = table_names(db.pool()).await;
    for table in ["_sqlx_migrations", "users", "projects", "tasks"] {
        assert!(
            tables.iter().any(|t| t == table),
            "Missing table: {}. Found tables: {:?}",
            table,
            tables
        );
    }
    // Library tables stay out of the task manager database
    assert!(!tables.iter().any(|t| t == "books"));
}

#[tokio::test(flavor = "multi_thread")]
async fn migrate_is_idempotent() {
    let db = SqliteLibraryDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");

    db.migrate().await.expect("First migration should succeed");
    db.migrate().await.expect("Second migration should succeed");
}

#[tokio::test(flavor = "multi_thread")]
async fn in_memory_database_keeps_state_between_statements() {
    let db = SqliteTaskManagerDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");

    sqlx::query("INSERT INTO projects (name, description) VALUES ('a', 'b')")
        .execute(db.pool())
        .await
        .expect("Insert should succeed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
        .fetch_one(db.pool())
        .await
        .expect("Count should succeed");
    assert_eq!(count, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn open_creates_database_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("library.db");

    let db = SqliteLibraryDatabase::open(&path)
        .await
        .expect("Open should succeed");
    db.migrate().await.expect("Migration should succeed");

    assert!(path.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn file_database_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("taskmanager.db");

    {
        let db = SqliteTaskManagerDatabase::open(&path)
            .await
            .expect("Open should succeed");
        db.migrate().await.expect("Migration should succeed");
        sqlx::query("INSERT INTO users (username, email) VALUES ('ada', 'ada@example.com')")
            .execute(db.pool())
            .await
            .expect("Insert should succeed");
        db.pool().close().await;
    }

    let db = SqliteTaskManagerDatabase::open(&path)
        .await
        .expect("Reopen should succeed");
    db.migrate().await.expect("Migration should succeed");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(db.pool())
        .await
        .expect("Count should succeed");
    assert_eq!(count, 1);
}
