//! Review-related DTOs.

use gourmet_core::rules::not_blank;
use gourmet_core::SortDirection;
use gourmet_domain::Review;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use validator::Validate;

/// Request to create or edit a review.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreateUpdateRequest {
    #[validate(custom(function = "not_blank", message = "Content is required"))]
    pub content: String,

    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: u8,

    /// References to already uploaded photos.
    #[serde(default)]
    pub photo_ids: Vec<String>,
}

/// Review field a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReviewSortField {
    #[default]
    DatePosted,
    Rating,
}

impl ReviewSortField {
    /// Unknown names fall back to `DatePosted`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "rating" => Self::Rating,
            _ => Self::DatePosted,
        }
    }

    fn compare(self, a: &Review, b: &Review) -> Ordering {
        match self {
            Self::DatePosted => a.date_posted.cmp(&b.date_posted),
            Self::Rating => a.rating.cmp(&b.rating),
        }
    }
}

impl fmt::Display for ReviewSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatePosted => f.write_str("datePosted"),
            Self::Rating => f.write_str("rating"),
        }
    }
}

/// Ordering requested for a review list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewSort {
    pub field: ReviewSortField,
    pub direction: SortDirection,
}

impl Default for ReviewSort {
    /// Newest first.
    fn default() -> Self {
        Self::new(ReviewSortField::DatePosted, SortDirection::Desc)
    }
}

impl ReviewSort {
    #[must_use]
    pub const fn new(field: ReviewSortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Parses `field[,asc|desc]`. A missing or unrecognised direction is
    /// ascending.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut parts = value.splitn(2, ',');
        let field = ReviewSortField::parse(parts.next().unwrap_or_default());
        let direction = parts
            .next()
            .and_then(SortDirection::parse)
            .unwrap_or(SortDirection::Asc);
        Self::new(field, direction)
    }

    /// Stable in-place sort. Equal keys keep their stored order in both
    /// directions.
    pub fn apply(&self, reviews: &mut [Review]) {
        let field = self.field;
        if self.direction.is_ascending() {
            reviews.sort_by(|a, b| field.compare(a, b));
        } else {
            reviews.sort_by(|a, b| field.compare(b, a));
        }
    }
}

impl fmt::Display for ReviewSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.field, self.direction)
    }
}
