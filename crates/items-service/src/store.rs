//! The process-lifetime, append-only item store.
//!
//! [`ItemStore`] owns an ordered sequence of [`Item`]s. Items are opaque
//! JSON values supplied verbatim by clients; no schema is enforced. The
//! only mutation is [`ItemStore::append`], and reads return a copy of the
//! whole sequence in insertion order.

use serde_json::Value;
use tokio::sync::RwLock;

/// A single stored item: any JSON value (null, bool, number, string,
/// array or object), kept exactly as the client sent it.
pub type Item = Value;

/// Ordered, append-only collection of [`Item`]s.
///
/// Shared between request handlers behind an `Arc`. Appends take the
/// write lock so concurrent requests never lose an update; listings take
/// the read lock and clone the sequence.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the end of the store and return it as stored.
    pub async fn append(&self, item: Item) -> Item {
        self.items.write().await.push(item.clone());
        item
    }

    /// Return a copy of every stored item in insertion order.
    pub async fn snapshot(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    /// Number of items currently stored.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    /// Whether the store holds no items.
    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}
