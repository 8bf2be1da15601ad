//! In-memory bookmark store
//!
//! Process-lifetime storage for development and tests. Contents are lost on
//! restart. Ids come from a counter that only moves forward, so a deleted
//! id is never handed out again.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BookmarkStore, StoreError};
use crate::models::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};

#[derive(Debug)]
struct Inner {
    next_id: BookmarkId,
    bookmarks: Vec<Bookmark>,
}

/// Bookmark store backed by an ordered `Vec`
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                bookmarks: Vec::new(),
            }),
        }
    }

    /// Create a store pre-populated with `bookmarks`, assigning ids in order.
    pub fn with_bookmarks(bookmarks: impl IntoIterator<Item = NewBookmark>) -> Self {
        let mut inner = Inner {
            next_id: 1,
            bookmarks: Vec::new(),
        };
        for bookmark in bookmarks {
            let id = inner.next_id;
            inner.next_id += 1;
            inner.bookmarks.push(bookmark.into_bookmark(id));
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Number of stored bookmarks.
    pub async fn len(&self) -> usize {
        self.inner.read().await.bookmarks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookmarkStore for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }

    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        Ok(self.inner.read().await.bookmarks.clone())
    }

    async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.bookmarks.iter().find(|b| b.id == id).cloned())
    }

    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let stored = bookmark.into_bookmark(id);
        inner.bookmarks.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: BookmarkId) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().await;
        match inner.bookmarks.iter().position(|b| b.id == id) {
            Some(index) => {
                inner.bookmarks.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn update(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let bookmark = inner
            .bookmarks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound { id })?;

        patch.apply_to(bookmark);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rating, WebUrl};

    fn new_bookmark(title: &str) -> NewBookmark {
        NewBookmark {
            title: title.to_owned(),
            url: WebUrl::new("https://example.com").unwrap(),
            description: format!("{} description", title),
            rating: Rating::new(3).unwrap(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let a = store.insert(new_bookmark("a")).await.unwrap();
        let b = store.insert(new_bookmark("b")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let store = MemoryStore::with_bookmarks(["c", "a", "b"].map(new_bookmark));
        let titles: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn get_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_by_id(42).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_removes_only_match() {
        let store = MemoryStore::with_bookmarks(["a", "b", "c"].map(new_bookmark));

        assert_eq!(store.delete(2).await.unwrap(), 1);
        let ids: Vec<_> = store.list_all().await.unwrap().iter().map(|b| b.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[tokio::test]
    async fn delete_missing_is_noop() {
        let store = MemoryStore::with_bookmarks(["a", "b"].map(new_bookmark));

        assert_eq!(store.delete(99).await.unwrap(), 0);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn ids_not_reused_after_delete() {
        let store = MemoryStore::new();
        let first = store.insert(new_bookmark("a")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.insert(new_bookmark("b")).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn update_merges_fields() {
        let store = MemoryStore::with_bookmarks([new_bookmark("a")]);
        let patch = BookmarkPatch {
            rating: Some(5),
            ..Default::default()
        };
        store.update(1, patch).await.unwrap();

        let b = store.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(b.rating, 5);
        assert_eq!(b.title, "a");
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store
            .update(3, BookmarkPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 3 }));
    }
}
