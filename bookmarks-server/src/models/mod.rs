//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod bookmark;
pub mod rating;
pub mod validation;
pub mod web_url;

pub use bookmark::{Bookmark, BookmarkId, BookmarkPatch, NewBookmark};
pub use rating::Rating;
pub use validation::{is_falsy, ValidationError};
pub use web_url::WebUrl;
