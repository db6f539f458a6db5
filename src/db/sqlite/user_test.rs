//! Tests for SqliteUserRepository.

use crate::db::{
    DbError, NewUser, Page, SqliteTaskManagerDatabase, TaskManagerDatabase, UserRepository,
};

async fn setup_db() -> SqliteTaskManagerDatabase {
    let db = SqliteTaskManagerDatabase::in_memory()
        .await
        .expect("Failed to create in-memory database");
    db.migrate().await.expect("Migration should succeed");
    db
}

fn user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn create_and_get_user() {
    let db = setup_db().await;
    let repo = db.users();

    let created = repo
        .create(&user("ada", "ada@example.com"))
        .await
        .expect("Create should succeed");

    let retrieved = repo.get(created.id).await.expect("Get should succeed");
    assert_eq!(retrieved, created);
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_username_is_constraint_error() {
    let db = setup_db().await;
    let repo = db.users();

    repo.create(&user("ada", "ada@example.com"))
        .await
        .expect("Create should succeed");

    let result = repo.create(&user("ada", "other@example.com")).await;
    assert!(matches!(result, Err(DbError::Constraint { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_email_is_constraint_error() {
    let db = setup_db().await;
    let repo = db.users();

    repo.create(&user("ada", "ada@example.com"))
        .await
        .expect("Create should succeed");

    let result = repo.create(&user("grace", "ada@example.com")).await;
    assert!(matches!(result, Err(DbError::Constraint { .. })));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_user_keeps_own_unique_values() {
    let db = setup_db().await;
    let repo = db.users();

    let created = repo
        .create(&user("ada", "ada@example.com"))
        .await
        .expect("Create should succeed");

    // Re-saving the same username with a new email is fine
    let updated = repo
        .update(created.id, &user("ada", "lovelace@example.com"))
        .await
        .expect("Update should succeed");
    assert_eq!(updated.email, "lovelace@example.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_and_delete_users() {
    let db = setup_db().await;
    let repo = db.users();

    let ada = repo
        .create(&user("ada", "ada@example.com"))
        .await
        .expect("Create should succeed");
    repo.create(&user("grace", "grace@example.com"))
        .await
        .expect("Create should succeed");

    let page = repo
        .list(Page { skip: 1, limit: 10 })
        .await
        .expect("List should succeed");
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].username, "grace");

    repo.delete(ada.id).await.expect("Delete should succeed");
    assert!(matches!(repo.get(ada.id).await, Err(DbError::NotFound { .. })));
}
