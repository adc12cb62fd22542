//! Axum router construction for the items service.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::store::ItemStore;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- welcome text
/// - `GET /items` -- list items
/// - `POST /items` -- append an item
///
/// Unknown paths answer `404` and unsupported methods on `/items` answer
/// `405`, both with Axum's default empty bodies.
pub fn build_router(store: Arc<ItemStore>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/items", get(handlers::list_items).post(handlers::add_item))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
