//! Review entity, embedded in a restaurant.

use crate::value_objects::{Photo, User};
use chrono::{DateTime, Duration, Utc};
use gourmet_core::{ReviewId, UserId};
use serde::{Deserialize, Serialize};

/// Default period after posting during which the author may edit a review.
pub const DEFAULT_EDIT_WINDOW_HOURS: i64 = 48;

/// A user's review of a restaurant.
///
/// Reviews have no storage of their own; they live and die inside the
/// owning restaurant document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// Set once at creation and never changed.
    pub date_posted: DateTime<Utc>,
    pub last_edited: DateTime<Utc>,
    pub written_by: User,
}

impl Review {
    /// Creates a review posted at `now` with a fresh id.
    #[must_use]
    pub fn new(
        author: User,
        content: String,
        rating: u8,
        photos: Vec<Photo>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ReviewId::generate(),
            content,
            rating,
            photos,
            date_posted: now,
            last_edited: now,
            written_by: author,
        }
    }

    /// Returns true if `user_id` wrote this review.
    #[must_use]
    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        self.written_by.is_same_user(user_id)
    }

    /// Last instant at which the review may still be edited, or `None`
    /// when the deadline lies past the representable range.
    #[must_use]
    pub fn edit_deadline(&self, window: Duration) -> Option<DateTime<Utc>> {
        self.date_posted.checked_add_signed(window)
    }

    /// Whether an edit at `now` falls inside the window. The window is
    /// anchored on `date_posted`, so editing does not extend it.
    #[must_use]
    pub fn is_editable_at(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.edit_deadline(window).map_or(true, |deadline| now <= deadline)
    }

    /// Replaces content, rating and photos, stamping `last_edited`.
    pub fn edit(&mut self, content: String, rating: u8, photos: Vec<Photo>, now: DateTime<Utc>) {
        self.content = content;
        self.rating = rating;
        self.photos = photos;
        self.last_edited = now.max(self.date_posted);
    }
}
