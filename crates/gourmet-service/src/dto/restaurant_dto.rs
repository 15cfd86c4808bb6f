//! Restaurant-related DTOs.

use chrono::{DateTime, Utc};
use gourmet_core::rules::not_blank;
use gourmet_domain::{
    Address, ContactInformation, GeoPoint, OperatingHours, Photo, RestaurantDetails,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create or fully update a restaurant.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantCreateUpdateRequest {
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 128, message = "Name must be at most 128 characters")
    )]
    pub name: String,

    #[validate(custom(function = "not_blank", message = "Cuisine type is required"))]
    pub cuisine_type: String,

    #[validate(nested)]
    pub contact_information: ContactInformation,

    #[validate(nested)]
    pub address: Address,

    #[serde(default)]
    pub operating_hours: OperatingHours,

    /// References to already uploaded photos.
    #[serde(default)]
    pub photo_ids: Vec<String>,
}

impl RestaurantCreateUpdateRequest {
    /// Builds the mutable restaurant fields, with photos stamped at `now`.
    #[must_use]
    pub fn into_details(self, geo_location: GeoPoint, now: DateTime<Utc>) -> RestaurantDetails {
        RestaurantDetails {
            name: self.name,
            cuisine_type: self.cuisine_type,
            contact_information: self.contact_information,
            address: self.address,
            geo_location,
            operating_hours: self.operating_hours,
            photos: Photo::from_urls(self.photo_ids, now),
        }
    }
}

/// Restaurant search filters. Which filters apply is decided by [`SearchRoute`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantSearchQuery {
    pub query: Option<String>,
    pub min_rating: Option<f32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Radius in kilometres.
    pub radius: Option<f64>,
}

/// The single store query a search resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchRoute<'a> {
    MinRating(f32),
    Text { query: &'a str, min_rating: f32 },
    Near { latitude: f64, longitude: f64, radius: f64 },
    All,
}

impl RestaurantSearchQuery {
    /// Picks the store query. First match wins:
    ///
    /// 1. `min_rating` set and `query` absent or empty
    /// 2. `query` not blank, with `min_rating` defaulting to 0
    /// 3. latitude, longitude and radius all set
    /// 4. everything
    #[must_use]
    pub fn route(&self) -> SearchRoute<'_> {
        let query = self.query.as_deref();

        if let Some(min_rating) = self.min_rating {
            if query.map_or(true, str::is_empty) {
                return SearchRoute::MinRating(min_rating);
            }
        }

        if let Some(query) = query.filter(|q| !q.trim().is_empty()) {
            return SearchRoute::Text {
                query,
                min_rating: self.min_rating.unwrap_or(0.0),
            };
        }

        if let (Some(latitude), Some(longitude), Some(radius)) =
            (self.latitude, self.longitude, self.radius)
        {
            return SearchRoute::Near {
                latitude,
                longitude,
                radius,
            };
        }

        SearchRoute::All
    }
}
