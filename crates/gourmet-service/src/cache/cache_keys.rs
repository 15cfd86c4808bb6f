//! Cache key builders, one per read operation.
//!
//! Keys are only unique within their region. Free-form values are
//! `Debug`-formatted so that quoting keeps composite keys unambiguous.

use crate::dto::{RestaurantSearchQuery, ReviewSort};
use gourmet_core::{PageRequest, RestaurantId, ReviewId};

/// Key for a single restaurant. Region: `restaurant`.
#[must_use]
pub fn restaurant_by_id(id: &RestaurantId) -> String {
    format!("id:{}", id)
}

/// Key for one search page over the full parameter tuple. Region: `restaurants`.
#[must_use]
pub fn restaurant_search(query: &RestaurantSearchQuery, page: PageRequest) -> String {
    format!(
        "q:{:?}:min:{:?}:lat:{:?}:lon:{:?}:r:{:?}:page:{}:size:{}",
        query.query,
        query.min_rating,
        query.latitude,
        query.longitude,
        query.radius,
        page.page,
        page.size
    )
}

/// Key for a single review. Region: `review`.
#[must_use]
pub fn review_by_id(restaurant_id: &RestaurantId, review_id: &ReviewId) -> String {
    format!("restaurant:{}:review:{}", restaurant_id, review_id)
}

/// Key for one page of a restaurant's reviews. Region: `reviews`.
#[must_use]
pub fn review_list(
    restaurant_id: &RestaurantId,
    page: PageRequest,
    sort: Option<&ReviewSort>,
) -> String {
    let sort = sort.map_or_else(|| "default".to_string(), ToString::to_string);
    format!(
        "restaurant:{}:page:{}:size:{}:sort:{}",
        restaurant_id, page.page, page.size, sort
    )
}
