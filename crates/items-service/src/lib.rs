//! Minimal HTTP service exposing an in-memory collection of JSON items.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Welcome text** (`GET /`) as a plain-text greeting
//! - **Item listing** (`GET /items`) returning every stored item as a
//!   JSON array in insertion order
//! - **Item creation** (`POST /items`) accepting any JSON value, appending
//!   it to the store and echoing it back with `201 Created`
//!
//! # Architecture
//!
//! A single [`ItemStore`] is constructed at process start and handed to
//! the router wrapped in an [`Arc`](std::sync::Arc). Handlers receive it
//! through Axum's `State` extractor. The store guards its sequence with a
//! read-write lock because the Tokio runtime dispatches requests on
//! multiple worker threads.
//!
//! Nothing is persisted: the store lives as long as the process.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod store;

// Re-export primary types for convenience.
pub use config::{ConfigError, LoggingConfig, ServerConfig, ServiceConfig};
pub use error::ServiceError;
pub use router::build_router;
pub use server::{serve_listener, start_server, ServerError};
pub use store::{Item, ItemStore};
