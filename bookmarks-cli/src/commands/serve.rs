//! HTTP server command
//!
//! Picks the storage backend, prepares it, and runs the bookmarks server
//! until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use bookmarks_server::db::{create_pool_with_options, ensure_schema, PgStore, DEFAULT_MAX_CONNECTIONS};
use bookmarks_server::{run_server, BookmarkStore, MemoryStore, ServerConfig};

/// Storage backend for bookmarks
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Process-lifetime list; contents are lost on exit
    Memory,
    /// PostgreSQL `bookmarks` table
    Postgres,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    pub bind: SocketAddr,

    /// Storage backend
    #[arg(long, value_enum, env = "BOOKMARKS_STORE", default_value = "memory")]
    pub store: StoreKind,

    /// Database URL, required for the postgres store
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Build the configured store.
async fn open_store(args: &ServeArgs) -> Result<Arc<dyn BookmarkStore>> {
    match args.store {
        StoreKind::Memory => {
            tracing::warn!("Using in-memory store; bookmarks will not survive a restart");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreKind::Postgres => {
            let database_url = args
                .database_url
                .as_deref()
                .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

            let pool = create_pool_with_options(database_url, args.max_connections)
                .await
                .context("Failed to create database pool")?;
            ensure_schema(&pool)
                .await
                .context("Failed to prepare bookmarks table")?;

            Ok(Arc::new(PgStore::new(pool)))
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting bookmarks server on {}", args.bind);

    let store = open_store(&args).await?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Run server (blocks until shutdown)
    run_server(store, config).await.context("Server error")?;

    Ok(())
}
