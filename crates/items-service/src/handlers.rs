//! HTTP endpoint handlers for the items service.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Plain-text welcome message |
//! | `GET` | `/items` | List all items in insertion order |
//! | `POST` | `/items` | Append a JSON item and echo it back |
//!
//! Request-body failures on `POST /items` are Axum's own `Json`
//! rejections (`415` without a JSON content type, `400` for malformed
//! JSON). No custom error bodies are produced here.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use crate::store::{Item, ItemStore};

/// Body returned by `GET /`.
pub const WELCOME_MESSAGE: &str = "Welcome to the Items API!";

/// Serve the fixed welcome text.
pub async fn index() -> &'static str {
    WELCOME_MESSAGE
}

/// Return every stored item as a JSON array.
pub async fn list_items(State(store): State<Arc<ItemStore>>) -> Json<Vec<Item>> {
    let items = store.snapshot().await;
    debug!(count = items.len(), "Listing items");
    Json(items)
}

/// Append the request body to the store and echo it with `201 Created`.
///
/// Any JSON value is accepted, not only objects.
pub async fn add_item(
    State(store): State<Arc<ItemStore>>,
    Json(item): Json<Item>,
) -> (StatusCode, Json<Item>) {
    let stored = store.append(item).await;
    let count = store.len().await;
    debug!(count, "Item appended");
    (StatusCode::CREATED, Json(stored))
}
