//! Shared fixtures for repository integration tests.

use gourmet_core::RestaurantId;
use gourmet_domain::{
    Address, ContactInformation, GeoPoint, OperatingHours, Restaurant, RestaurantDetails, Review,
    User,
};

/// An unsaved restaurant in central London.
pub fn restaurant(name: &str) -> Restaurant {
    Restaurant::new(
        RestaurantId::generate(),
        RestaurantDetails {
            name: name.to_string(),
            cuisine_type: "British".to_string(),
            contact_information: ContactInformation::default(),
            address: Address {
                street_number: "10".to_string(),
                street_name: "Greek Street".to_string(),
                unit: None,
                city: "London".to_string(),
                state: String::new(),
                postal_code: "W1D 4DH".to_string(),
                country: "United Kingdom".to_string(),
            },
            geo_location: GeoPoint::new(51.5142, -0.1318),
            operating_hours: OperatingHours::default(),
            photos: Vec::new(),
        },
    )
}

/// A review by `author` posted now.
pub fn review(author: &str, rating: u8) -> Review {
    Review::new(
        User::new(author, author),
        format!("{author} says {rating}"),
        rating,
        Vec::new(),
        chrono::Utc::now(),
    )
}
