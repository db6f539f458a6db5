//! Tests for the in-memory item store.

use crate::db::{DbError, Item, ItemStore};

fn item(name: &str) -> Item {
    Item {
        name: name.to_string(),
        description: None,
    }
}

#[tokio::test]
async fn push_assigns_sequential_positions() {
    let store = ItemStore::new();
    assert!(store.list(0, None).await.is_empty());

    let (first, _) = store.push(item("a")).await;
    let (second, _) = store.push(item("b")).await;

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(store.list(0, None).await.len(), 2);
}

#[tokio::test]
async fn get_returns_item_at_position() {
    let store = ItemStore::new();
    store.push(item("a")).await;
    store
        .push(Item {
            name: "b".to_string(),
            description: Some("second".to_string()),
        })
        .await;

    let got = store.get(1).await.expect("Get should succeed");
    assert_eq!(got.name, "b");
    assert_eq!(got.description.as_deref(), Some("second"));
}

#[tokio::test]
async fn get_out_of_range_is_not_found() {
    let store = ItemStore::new();
    store.push(item("a")).await;

    assert!(matches!(store.get(1).await, Err(DbError::NotFound { .. })));
    assert!(matches!(store.get(-1).await, Err(DbError::NotFound { .. })));
}

#[tokio::test]
async fn list_respects_skip_and_limit() {
    let store = ItemStore::new();
    for name in ["a", "b", "c", "d"] {
        store.push(item(name)).await;
    }

    let all = store.list(0, None).await;
    assert_eq!(all.len(), 4);

    let window = store.list(1, Some(2)).await;
    let names: Vec<_> = window.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["b", "c"]);

    assert!(store.list(10, None).await.is_empty());
}

#[tokio::test]
async fn clones_share_the_same_sequence() {
    let store = ItemStore::new();
    let handle = store.clone();

    handle.push(item("shared")).await;

    assert_eq!(store.list(0, None).await.len(), 1);
}
