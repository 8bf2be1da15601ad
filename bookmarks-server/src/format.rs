//! External JSON shape of a bookmark
//!
//! Free-text fields are passed through `ammonia`, so markup that could run
//! script in a browser (script elements, event-handler attributes,
//! `javascript:` links) never reaches a client. The URL was validated on
//! creation and is emitted as stored.

use serde::{Deserialize, Serialize};

use crate::models::{Bookmark, BookmarkId};

/// Bookmark as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkResponse {
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

impl From<Bookmark> for BookmarkResponse {
    fn from(b: Bookmark) -> Self {
        Self {
            id: b.id,
            title: sanitize(&b.title),
            url: b.url,
            description: sanitize(&b.description),
            rating: b.rating,
        }
    }
}

/// Strip executable markup from user-supplied text.
pub fn sanitize(text: &str) -> String {
    ammonia::clean(text)
}
