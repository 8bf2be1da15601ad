//! Bookmarks table bootstrap

use sqlx::PgPool;

/// Create the `bookmarks` table if it does not exist yet.
///
/// Idempotent; safe to run on every startup. There is no range constraint on
/// `rating` because partial updates store whatever integer they are given.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring bookmarks table exists");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bookmarks (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            url TEXT NOT NULL,
            description TEXT NOT NULL,
            rating INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
