//! Bookmark records

use super::{Rating, WebUrl};

/// Bookmark identifier, assigned by the store on insert and never reused
pub type BookmarkId = i64;

/// Bookmark as held by a store
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    pub description: String,
    pub rating: i32,
}

/// Fully validated bookmark, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookmark {
    pub title: String,
    pub url: WebUrl,
    pub description: String,
    pub rating: Rating,
}

impl NewBookmark {
    /// Attach the id assigned by the store.
    pub fn into_bookmark(self, id: BookmarkId) -> Bookmark {
        Bookmark {
            id,
            title: self.title,
            url: self.url.into_string(),
            description: self.description,
            rating: self.rating.get(),
        }
    }
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub rating: Option<i32>,
}

impl BookmarkPatch {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.description.is_none()
            && self.rating.is_none()
    }

    /// Merge the supplied fields into `bookmark`.
    pub fn apply_to(&self, bookmark: &mut Bookmark) {
        if let Some(title) = &self.title {
            bookmark.title.clone_from(title);
        }
        if let Some(url) = &self.url {
            bookmark.url.clone_from(url);
        }
        if let Some(description) = &self.description {
            bookmark.description.clone_from(description);
        }
        if let Some(rating) = self.rating {
            bookmark.rating = rating;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bookmark {
        NewBookmark {
            title: "Apple".into(),
            url: WebUrl::new("http://www.apple.com").unwrap(),
            description: "They make computers".into(),
            rating: Rating::new(4).unwrap(),
        }
        .into_bookmark(7)
    }

    #[test]
    fn into_bookmark_keeps_fields() {
        let b = sample();
        assert_eq!(b.id, 7);
        assert_eq!(b.url, "http://www.apple.com");
        assert_eq!(b.rating, 4);
    }

    #[test]
    fn empty_patch() {
        assert!(BookmarkPatch::default().is_empty());
        let patch = BookmarkPatch {
            rating: Some(2),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_only_touches_supplied_fields() {
        let mut b = sample();
        let patch = BookmarkPatch {
            title: Some("Banana".into()),
            ..Default::default()
        };
        patch.apply_to(&mut b);

        assert_eq!(b.title, "Banana");
        assert_eq!(b.url, "http://www.apple.com");
        assert_eq!(b.description, "They make computers");
        assert_eq!(b.rating, 4);
    }
}
