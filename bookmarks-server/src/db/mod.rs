//! PostgreSQL storage - connection pool, table bootstrap and the
//! [`PgStore`] backend
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - Single statement per operation, no check-then-write
//! - Partial updates built with `sqlx::QueryBuilder`

pub mod bookmarks;
pub mod pool;
pub mod schema;

pub use bookmarks::PgStore;
pub use pool::{create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use schema::ensure_schema;
