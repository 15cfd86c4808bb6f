//! Review service trait definition.

use crate::dto::{ReviewCreateUpdateRequest, ReviewSort};
use async_trait::async_trait;
use gourmet_core::{GourmetResult, Interface, Page, PageRequest, RestaurantId, ReviewId};
use gourmet_domain::{Review, User};

/// Review use cases. Reviews are always read and written through their
/// owning restaurant, and every write recomputes its average rating.
#[async_trait]
pub trait ReviewService: Interface + Send + Sync {
    /// Adds `author`'s review. Each user may review a restaurant once.
    async fn create_review(
        &self,
        author: &User,
        restaurant_id: &RestaurantId,
        request: ReviewCreateUpdateRequest,
    ) -> GourmetResult<Review>;

    /// Lists a page of reviews, newest first unless `sort` says otherwise.
    async fn list_reviews(
        &self,
        restaurant_id: &RestaurantId,
        page: PageRequest,
        sort: Option<ReviewSort>,
    ) -> GourmetResult<Page<Review>>;

    /// Gets one review, if it exists.
    async fn get_review(
        &self,
        restaurant_id: &RestaurantId,
        review_id: &ReviewId,
    ) -> GourmetResult<Option<Review>>;

    /// Edits a review. Only its author may, and only inside the edit window.
    async fn update_review(
        &self,
        author: &User,
        restaurant_id: &RestaurantId,
        review_id: &ReviewId,
        request: ReviewCreateUpdateRequest,
    ) -> GourmetResult<Review>;

    /// Removes a review. Removing a missing review succeeds.
    async fn delete_review(
        &self,
        restaurant_id: &RestaurantId,
        review_id: &ReviewId,
    ) -> GourmetResult<()>;
}
