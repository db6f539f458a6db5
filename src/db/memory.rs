//! In-process item store.
//!
//! Items live in an ordered `Vec` behind a lock and are addressed by their
//! position. Nothing is persisted; a restart starts from an empty store.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::db::{DbError, DbResult, Item};

/// Shared, cloneable handle to the item sequence.
#[derive(Clone, Default)]
pub struct ItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return it with its position.
    pub async fn push(&self, item: Item) -> (usize, Item) {
        let mut items = self.items.write().await;
        items.push(item.clone());
        (items.len() - 1, item)
    }

    /// Get the item at `index`. Negative or out-of-range positions are not found.
    pub async fn get(&self, index: i64) -> DbResult<Item> {
        let items = self.items.read().await;
        usize::try_from(index)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .ok_or_else(|| DbError::not_found("Item", index))
    }

    /// Snapshot of the items in insertion order, skipping `skip` and keeping at
    /// most `limit` when given.
    pub async fn list(&self, skip: usize, limit: Option<usize>) -> Vec<Item> {
        let items = self.items.read().await;
        items
            .iter()
            .skip(skip)
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}
