//! Bookmark endpoints
//!
//! Every request goes Received -> Validated -> Executed -> Responded.
//! Nothing is kept between requests; all validation runs before the store
//! is touched.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::format::BookmarkResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonOrEmpty, ValidBookmarkId};
use crate::http::server::AppState;
use crate::models::rating::coerce_integer;
use crate::models::{
    is_falsy, Bookmark, BookmarkId, BookmarkPatch, NewBookmark, Rating, ValidationError, WebUrl,
};

/// Bookmark fields as sent by a client.
///
/// Kept as raw JSON so presence, falsiness and type can be judged separately
/// (a rating may arrive as `4` or `"4"`).
#[derive(Debug, Default, Deserialize)]
pub struct BookmarkFields {
    pub title: Option<Value>,
    pub url: Option<Value>,
    pub description: Option<Value>,
    pub rating: Option<Value>,
}

impl BookmarkFields {
    /// Validate a creation payload.
    ///
    /// Checks run in a fixed order: presence of all four fields, then the
    /// rating range, then the URL.
    pub fn into_new_bookmark(self) -> Result<NewBookmark, ValidationError> {
        let title = required_text(self.title)?;
        let url = required_text(self.url)?;
        let description = required_text(self.description)?;
        let rating = match self.rating {
            Some(value) if !is_falsy(Some(&value)) => value,
            _ => return Err(ValidationError::MissingField),
        };

        let rating = Rating::from_json(&rating)?;
        let url = WebUrl::new(&url)?;

        Ok(NewBookmark {
            title,
            url,
            description,
            rating,
        })
    }

    /// Turn an update payload into a patch.
    ///
    /// Falsy fields count as not supplied. The only check on supplied values
    /// is that they can be stored: text fields must be strings and the rating
    /// must coerce to an integer (`WrongType`). Range and URL format are not
    /// checked, so an update may set a rating or URL that creation would refuse.
    pub fn into_patch(self) -> Result<BookmarkPatch, ValidationError> {
        let supplied = [&self.title, &self.url, &self.description, &self.rating]
            .into_iter()
            .any(|v| !is_falsy(v.as_ref()));
        if !supplied {
            return Err(ValidationError::EmptyPatch);
        }

        Ok(BookmarkPatch {
            title: optional_text("title", self.title)?,
            url: optional_text("url", self.url)?,
            description: optional_text("description", self.description)?,
            rating: optional_rating(self.rating)?,
        })
    }
}

fn required_text(value: Option<Value>) -> Result<String, ValidationError> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Ok(s),
        _ => Err(ValidationError::MissingField),
    }
}

fn optional_text(field: &'static str, value: Option<Value>) -> Result<Option<String>, ValidationError> {
    if is_falsy(value.as_ref()) {
        return Ok(None);
    }
    match value {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Err(ValidationError::WrongType { field }),
    }
}

fn optional_rating(value: Option<Value>) -> Result<Option<i32>, ValidationError> {
    match value {
        Some(v) if !is_falsy(Some(&v)) => coerce_integer(&v)
            .and_then(|n| i32::try_from(n).ok())
            .map(Some)
            .ok_or(ValidationError::WrongType { field: "rating" }),
        _ => Ok(None),
    }
}

/// Look up a bookmark, turning a miss into the 404 response.
async fn find_bookmark(state: &AppState, id: BookmarkId) -> Result<Bookmark, ApiError> {
    state.store.get_by_id(id).await?.ok_or_else(|| {
        tracing::error!("Bookmark with id {} not found.", id);
        ApiError::NotFound
    })
}

/// GET /bookmarks - list all bookmarks
async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookmarkResponse>>, ApiError> {
    let bookmarks = state.store.list_all().await?;
    Ok(Json(
        bookmarks.into_iter().map(BookmarkResponse::from).collect(),
    ))
}

/// POST /bookmarks - create a bookmark
async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    JsonOrEmpty(fields): JsonOrEmpty<BookmarkFields>,
) -> Result<impl IntoResponse, ApiError> {
    let new_bookmark = fields.into_new_bookmark().inspect_err(|e| {
        tracing::error!("POST /bookmarks failed: {}", e);
    })?;

    let bookmark = state.store.insert(new_bookmark).await?;
    tracing::info!("Bookmark with id {} created", bookmark.id);

    let location = format!("/bookmarks/{}", bookmark.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookmarkResponse::from(bookmark)),
    ))
}

/// GET /bookmarks/{id} - get a single bookmark
async fn get_bookmark(
    State(state): State<Arc<AppState>>,
    ValidBookmarkId(id): ValidBookmarkId,
) -> Result<Json<BookmarkResponse>, ApiError> {
    let bookmark = find_bookmark(&state, id).await?;
    Ok(Json(BookmarkResponse::from(bookmark)))
}

/// DELETE /bookmarks/{id} - delete a bookmark
async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    ValidBookmarkId(id): ValidBookmarkId,
) -> Result<StatusCode, ApiError> {
    find_bookmark(&state, id).await?;
    state.store.delete(id).await?;
    tracing::info!("Bookmark {} deleted.", id);
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /bookmarks/{id} - update some fields of a bookmark
async fn update_bookmark(
    State(state): State<Arc<AppState>>,
    ValidBookmarkId(id): ValidBookmarkId,
    payload: Result<JsonOrEmpty<BookmarkFields>, ApiError>,
) -> Result<StatusCode, ApiError> {
    // Existence is checked before the body, so a missing id is always a 404.
    find_bookmark(&state, id).await?;

    let JsonOrEmpty(fields) = payload?;
    let patch = fields.into_patch().inspect_err(|e| {
        tracing::error!("PATCH /bookmarks/{} failed: {}", id, e);
    })?;

    state.store.update(id, patch.clone()).await?;
    tracing::info!(?patch, "Bookmark {} updated", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Bookmark routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookmarks", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmarks/{id}",
            get(get_bookmark)
                .delete(delete_bookmark)
                .patch(update_bookmark),
        )
}
