//! PostgreSQL bookmark store
//!
//! - list: ordered by id so output is deterministic
//! - insert: single `INSERT ... RETURNING`
//! - update: `SET` list built from the supplied fields only

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::models::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};
use crate::store::{BookmarkStore, StoreError};

/// Bookmark store backed by the `bookmarks` table
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkStore for PgStore {
    fn kind(&self) -> &'static str {
        "postgres"
    }

    async fn list_all(&self) -> Result<Vec<Bookmark>, StoreError> {
        let rows = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, title, url, description, rating
            FROM bookmarks
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn get_by_id(&self, id: BookmarkId) -> Result<Option<Bookmark>, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r#"
            SELECT id, title, url, description, rating
            FROM bookmarks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert(&self, bookmark: NewBookmark) -> Result<Bookmark, StoreError> {
        let row = sqlx::query_as::<_, Bookmark>(
            r#"
            INSERT INTO bookmarks (title, url, description, rating)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, url, description, rating
            "#,
        )
        .bind(&bookmark.title)
        .bind(bookmark.url.as_str())
        .bind(&bookmark.description)
        .bind(bookmark.rating.get())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: BookmarkId) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM bookmarks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn update(&self, id: BookmarkId, patch: BookmarkPatch) -> Result<(), StoreError> {
        // An empty SET list is not valid SQL; only report whether the row exists.
        if patch.is_empty() {
            return match self.get_by_id(id).await? {
                Some(_) => Ok(()),
                None => Err(StoreError::NotFound { id }),
            };
        }

        let mut builder = build_update(id, patch);
        let result = builder.build().execute(&self.pool).await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }
}

/// Build `UPDATE bookmarks SET ... WHERE id = $n` for the supplied fields.
fn build_update(id: BookmarkId, patch: BookmarkPatch) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE bookmarks SET ");

    {
        let mut set = builder.separated(", ");
        if let Some(title) = patch.title {
            set.push("title = ").push_bind_unseparated(title);
        }
        if let Some(url) = patch.url {
            set.push("url = ").push_bind_unseparated(url);
        }
        if let Some(description) = patch.description {
            set.push("description = ").push_bind_unseparated(description);
        }
        if let Some(rating) = patch.rating {
            set.push("rating = ").push_bind_unseparated(rating);
        }
    }

    builder.push(" WHERE id = ").push_bind(id);
    builder
}
