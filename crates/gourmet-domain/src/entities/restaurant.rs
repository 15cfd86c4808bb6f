//! Restaurant aggregate root.

use super::Review;
use crate::rating::average_rating;
use crate::value_objects::{Address, ContactInformation, GeoPoint, OperatingHours, Photo};
use gourmet_core::{RestaurantId, ReviewId, UserId};
use serde::{Deserialize, Serialize};

/// A restaurant document together with its embedded reviews and photos.
///
/// `average_rating` is derived state: every method that changes `reviews`
/// recomputes it before returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cuisine_type: String,
    pub contact_information: ContactInformation,
    pub address: Address,
    pub geo_location: GeoPoint,
    #[serde(default)]
    pub operating_hours: OperatingHours,
    #[serde(default)]
    pub average_rating: f32,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    /// Optimistic concurrency token, bumped by the store on every save.
    /// Zero means the aggregate has never been persisted.
    #[serde(default)]
    pub version: u64,
}

/// Mutable restaurant fields, overwritten together on update.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDetails {
    pub name: String,
    pub cuisine_type: String,
    pub contact_information: ContactInformation,
    pub address: Address,
    pub geo_location: GeoPoint,
    pub operating_hours: OperatingHours,
    pub photos: Vec<Photo>,
}

impl Restaurant {
    /// Creates an unsaved restaurant with no reviews.
    #[must_use]
    pub fn new(id: RestaurantId, details: RestaurantDetails) -> Self {
        Self {
            id,
            name: details.name,
            cuisine_type: details.cuisine_type,
            contact_information: details.contact_information,
            address: details.address,
            geo_location: details.geo_location,
            operating_hours: details.operating_hours,
            average_rating: 0.0,
            photos: details.photos,
            reviews: Vec::new(),
            version: 0,
        }
    }

    /// Overwrites every mutable field in place. Reviews and the average
    /// rating are left untouched.
    pub fn apply_details(&mut self, details: RestaurantDetails) {
        self.name = details.name;
        self.cuisine_type = details.cuisine_type;
        self.contact_information = details.contact_information;
        self.address = details.address;
        self.geo_location = details.geo_location;
        self.operating_hours = details.operating_hours;
        self.photos = details.photos;
    }

    /// Number of embedded reviews.
    #[must_use]
    pub fn total_reviews(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn find_review(&self, review_id: &ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|r| &r.id == review_id)
    }

    /// The review written by `author`, if any. At most one can exist.
    #[must_use]
    pub fn review_by(&self, author: &UserId) -> Option<&Review> {
        self.reviews.iter().find(|r| r.is_authored_by(author))
    }

    /// Appends a review.
    pub fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
        self.recompute_average_rating();
    }

    /// Swaps in an edited review. The edited review moves to the end of the
    /// list; list order carries no meaning.
    pub fn replace_review(&mut self, review: Review) {
        self.reviews.retain(|r| r.id != review.id);
        self.reviews.push(review);
        self.recompute_average_rating();
    }

    /// Removes a review. Returns false if it was not present.
    pub fn remove_review(&mut self, review_id: &ReviewId) -> bool {
        let before = self.reviews.len();
        self.reviews.retain(|r| &r.id != review_id);
        self.recompute_average_rating();
        self.reviews.len() != before
    }

    /// Re-derives `average_rating` from the current review list.
    pub fn recompute_average_rating(&mut self) {
        self.average_rating = average_rating(&self.reviews);
    }
}
