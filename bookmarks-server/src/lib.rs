//! bookmarks-server: HTTP service for a single bookmark resource
//!
//! Exposes list/create/get/delete/update over `/bookmarks`, backed by either
//! an in-memory list ([`store::MemoryStore`]) or a PostgreSQL table
//! ([`db::PgStore`]). The backend is injected through [`http::AppState`].

pub mod db;
pub mod format;
pub mod http;
pub mod models;
pub mod store;

pub use format::BookmarkResponse;
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use store::{BookmarkStore, MemoryStore, StoreError};
