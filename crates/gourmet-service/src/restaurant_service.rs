//! Restaurant service trait definition.

use crate::dto::{RestaurantCreateUpdateRequest, RestaurantSearchQuery};
use async_trait::async_trait;
use gourmet_core::{GourmetResult, Interface, Page, PageRequest, RestaurantId};
use gourmet_domain::Restaurant;

/// Restaurant use cases.
#[async_trait]
pub trait RestaurantService: Interface + Send + Sync {
    /// Creates a restaurant with no reviews, geolocating its address.
    async fn create_restaurant(
        &self,
        request: RestaurantCreateUpdateRequest,
    ) -> GourmetResult<Restaurant>;

    /// Searches restaurants. Exactly one filter combination applies,
    /// see [`RestaurantSearchQuery::route`].
    async fn search_restaurants(
        &self,
        query: &RestaurantSearchQuery,
        page: PageRequest,
    ) -> GourmetResult<Page<Restaurant>>;

    /// Gets a restaurant by id, if it exists.
    async fn get_restaurant(&self, id: &RestaurantId) -> GourmetResult<Option<Restaurant>>;

    /// Overwrites every mutable field. Reviews and the average rating stay.
    async fn update_restaurant(
        &self,
        id: &RestaurantId,
        request: RestaurantCreateUpdateRequest,
    ) -> GourmetResult<Restaurant>;

    /// Deletes a restaurant and its reviews. Deleting a missing id succeeds.
    async fn delete_restaurant(&self, id: &RestaurantId) -> GourmetResult<()>;
}
