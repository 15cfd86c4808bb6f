//! Repository trait definitions.

use gourmet_core::{GourmetResult, Interface, Page, PageRequest, RestaurantId};
use gourmet_domain::Restaurant;
use async_trait::async_trait;

/// Gateway to the document store holding restaurant aggregates.
///
/// Whole aggregates are loaded and saved; reviews and photos travel inside
/// the restaurant document. Implementations carry no business logic.
#[async_trait]
pub trait RestaurantRepository: Interface + Send + Sync {
    /// Loads an aggregate by id.
    async fn find_by_id(&self, id: &RestaurantId) -> GourmetResult<Option<Restaurant>>;

    /// Persists an aggregate and returns the stored copy.
    ///
    /// Fails with `Conflict` when `restaurant.version` no longer matches the
    /// stored version. The returned copy carries the bumped version.
    async fn save(&self, restaurant: &Restaurant) -> GourmetResult<Restaurant>;

    /// Deletes an aggregate. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: &RestaurantId) -> GourmetResult<()>;

    /// Restaurants whose average rating is at least `min_rating`.
    async fn find_by_min_rating(
        &self,
        min_rating: f32,
        page: PageRequest,
    ) -> GourmetResult<Page<Restaurant>>;

    /// Full-text match on `query` combined with a minimum average rating.
    async fn find_by_query_and_min_rating(
        &self,
        query: &str,
        min_rating: f32,
        page: PageRequest,
    ) -> GourmetResult<Page<Restaurant>>;

    /// Restaurants within `radius_km` of the given point.
    async fn find_by_location_near(
        &self,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
        page: PageRequest,
    ) -> GourmetResult<Page<Restaurant>>;

    /// Unfiltered listing.
    async fn find_all(&self, page: PageRequest) -> GourmetResult<Page<Restaurant>>;
}
