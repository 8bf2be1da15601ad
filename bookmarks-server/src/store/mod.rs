//! Persistence access for bookmarks
//!
//! Handlers talk to storage only through [`BookmarkStore`], so the backend
//! (in-memory list or PostgreSQL table) is chosen when the state is built and
//! nowhere else.

pub mod memory;

use async_trait::async_trait;

use crate::models::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};

pub use memory::MemoryStore;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("bookmark {id} not found")]
    NotFound { id: BookmarkId },
}

/// The five bookmark operations every backend provides.
#[async_trait]
pub trait BookmarkStore: Send + Sync + 'static {
    /// Short backend name, reported by the health endpoint.
    fn kind(&self) -> &'static str;

    /// All bookmarks. The memory backend keeps insertion order.
    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError>;

    /// The bookmark with `id`, or `None`. A missing id is not an error.
    async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, StoreError>;

    /// Store a new bookmark and return it with its assigned id.
    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark, StoreError>;

    /// Remove the bookmark with `id`, returning how many records were removed.
    /// Removing a missing id is a no-op returning 0.
    async fn delete(&self, id: BookmarkId) -> Result<u64, StoreError>;

    /// Merge the supplied fields of `patch` into the bookmark with `id`.
    ///
    /// Returns `StoreError::NotFound` when no record matches.
    async fn update(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<(), StoreError>;
}
