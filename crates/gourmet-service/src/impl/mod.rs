//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `review_service.rs`).

pub mod restaurant_service_impl;
pub mod review_service_impl;

pub use restaurant_service_impl::RestaurantServiceComponent;
pub use review_service_impl::{ReviewServiceComponent, ReviewServiceComponentParameters};
