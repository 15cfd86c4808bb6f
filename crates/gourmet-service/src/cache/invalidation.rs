//! Which cache entries each mutation evicts, and the coordinator that
//! applies those evictions once a mutation has been persisted.

use super::{cache_keys, CacheInterface, CacheRegion};
use gourmet_core::RestaurantId;
use tracing::{debug, warn};

/// A persisted change to a restaurant aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    CreateRestaurant,
    UpdateRestaurant,
    DeleteRestaurant,
    CreateReview,
    UpdateReview,
    DeleteReview,
}

/// One eviction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eviction {
    /// Drop every entry in the region.
    Region(CacheRegion),
    /// Drop the single-restaurant entry of the mutated restaurant.
    RestaurantEntry,
}

const ON_RESTAURANT_CREATED: &[Eviction] = &[Eviction::Region(CacheRegion::RestaurantSearch)];

// Review regions are kept, so cached reviews of a deleted restaurant stay
// readable until a review mutation clears them.
const ON_RESTAURANT_CHANGED: &[Eviction] = &[
    Eviction::RestaurantEntry,
    Eviction::Region(CacheRegion::RestaurantSearch),
];

// A rating change moves the restaurant's average, which feeds every
// cached restaurant and search page.
const ON_REVIEW_CHANGED: &[Eviction] = &[
    Eviction::Region(CacheRegion::Restaurant),
    Eviction::Region(CacheRegion::RestaurantSearch),
    Eviction::Region(CacheRegion::Review),
    Eviction::Region(CacheRegion::ReviewList),
];

/// Static mutation → eviction table.
pub struct InvalidationPolicy;

impl InvalidationPolicy {
    #[must_use]
    pub const fn evictions(mutation: Mutation) -> &'static [Eviction] {
        match mutation {
            Mutation::CreateRestaurant => ON_RESTAURANT_CREATED,
            Mutation::UpdateRestaurant | Mutation::DeleteRestaurant => ON_RESTAURANT_CHANGED,
            Mutation::CreateReview | Mutation::UpdateReview | Mutation::DeleteReview => {
                ON_REVIEW_CHANGED
            }
        }
    }
}

/// Applies [`InvalidationPolicy`] to a cache.
///
/// Call only after the mutation was saved. Eviction failures are logged and
/// swallowed since the write itself already succeeded.
pub struct CacheInvalidator<'a> {
    cache: &'a dyn CacheInterface,
}

impl<'a> CacheInvalidator<'a> {
    #[must_use]
    pub fn new(cache: &'a dyn CacheInterface) -> Self {
        Self { cache }
    }

    pub async fn invalidate(&self, mutation: Mutation, restaurant_id: &RestaurantId) {
        for eviction in InvalidationPolicy::evictions(mutation) {
            let result = match *eviction {
                Eviction::Region(region) => self.cache.clear_region(region).await.map(|_| ()),
                Eviction::RestaurantEntry => self
                    .cache
                    .evict(
                        CacheRegion::Restaurant,
                        &cache_keys::restaurant_by_id(restaurant_id),
                    )
                    .await
                    .map(|_| ()),
            };

            if let Err(e) = result {
                warn!(
                    "Cache eviction {:?} after {:?} on restaurant {} failed: {}",
                    eviction, mutation, restaurant_id, e
                );
            }
        }

        debug!("Invalidated cache after {:?} on restaurant {}", mutation, restaurant_id);
    }
}
