//! Shared fixtures for service integration tests.

#![allow(dead_code)]

use gourmet_config::AppConfig;
use gourmet_domain::{Address, ContactInformation, OperatingHours, User};
use gourmet_service::di::{build_in_memory_module, InMemoryModule};
use gourmet_service::{
    CacheInterface, RestaurantCreateUpdateRequest, RestaurantService, ReviewCreateUpdateRequest,
    ReviewService,
};
use shaku::HasComponent;
use std::sync::Arc;

pub struct TestApp {
    pub module: Arc<InMemoryModule>,
    pub restaurants: Arc<dyn RestaurantService>,
    pub reviews: Arc<dyn ReviewService>,
    pub cache: Arc<dyn CacheInterface>,
}

/// Fully wired core with default configuration.
pub fn app() -> TestApp {
    let module = build_in_memory_module(&AppConfig::default()).expect("default config is valid");
    TestApp {
        restaurants: module.resolve(),
        reviews: module.resolve(),
        cache: module.resolve(),
        module,
    }
}

pub fn restaurant_request(name: &str, cuisine: &str) -> RestaurantCreateUpdateRequest {
    RestaurantCreateUpdateRequest {
        name: name.to_string(),
        cuisine_type: cuisine.to_string(),
        contact_information: ContactInformation {
            phone: "+44 20 7000 0000".to_string(),
            email: "bookings@example.com".to_string(),
            website: Some("https://example.com".to_string()),
        },
        address: Address {
            street_number: "1".to_string(),
            street_name: "Coal Drops Yard".to_string(),
            unit: None,
            city: "London".to_string(),
            state: String::new(),
            postal_code: "N1C 4AB".to_string(),
            country: "United Kingdom".to_string(),
        },
        operating_hours: OperatingHours::default(),
        photo_ids: Vec::new(),
    }
}

pub fn review_request(rating: u8) -> ReviewCreateUpdateRequest {
    ReviewCreateUpdateRequest {
        content: format!("Worth {rating} stars"),
        rating,
        photo_ids: Vec::new(),
    }
}

pub fn user(id: &str) -> User {
    User::new(id, id)
}
