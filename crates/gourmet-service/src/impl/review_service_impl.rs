//! Review service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, CacheInvalidator, CacheRegion, Mutation};
use crate::dto::{ReviewCreateUpdateRequest, ReviewSort};
use crate::review_service::ReviewService;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use gourmet_core::{
    GourmetError, GourmetResult, Page, PageRequest, RestaurantId, ReviewId, ValidateExt,
};
use gourmet_domain::{Photo, Restaurant, Review, User, DEFAULT_EDIT_WINDOW_HOURS};
use gourmet_repository::RestaurantRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Review service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = ReviewService)]
pub struct ReviewServiceComponent {
    #[shaku(inject)]
    restaurant_repository: Arc<dyn RestaurantRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    /// Hours after posting during which a review may be edited.
    #[shaku(default = DEFAULT_EDIT_WINDOW_HOURS)]
    edit_window_hours: i64,
}

impl ReviewServiceComponent {
    /// Wires the service by hand, outside a DI module.
    pub fn new(
        restaurant_repository: Arc<dyn RestaurantRepository>,
        cache: Arc<dyn CacheInterface>,
        edit_window_hours: i64,
    ) -> Self {
        Self {
            restaurant_repository,
            cache,
            edit_window_hours,
        }
    }

    /// Windows too long for a `Duration` saturate and never close.
    fn edit_window(&self) -> Duration {
        Duration::try_hours(self.edit_window_hours).unwrap_or(Duration::MAX)
    }

    async fn load_restaurant(&self, id: &RestaurantId) -> GourmetResult<Restaurant> {
        self.restaurant_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GourmetError::not_found("Restaurant", id))
    }

    async fn invalidate(&self, mutation: Mutation, id: &RestaurantId) {
        CacheInvalidator::new(self.cache.as_ref())
            .invalidate(mutation, id)
            .await;
    }
}

/// Reads the review back out of the saved aggregate.
fn read_back(saved: &Restaurant, review_id: &ReviewId) -> GourmetResult<Review> {
    saved.find_review(review_id).cloned().ok_or_else(|| {
        GourmetError::internal(format!(
            "Review {} missing from restaurant {} after save",
            review_id, saved.id
        ))
    })
}

#[async_trait]
impl ReviewService for ReviewServiceComponent {
    async fn create_review(
        &self,
        author: &User,
        restaurant_id: &RestaurantId,
        request: ReviewCreateUpdateRequest,
    ) -> GourmetResult<Review> {
        debug!("Creating review on {} by {}", restaurant_id, author.id);

        request.validate_request()?;

        let mut restaurant = self.load_restaurant(restaurant_id).await?;

        if restaurant.review_by(&author.id).is_some() {
            warn!("User {} already reviewed {}", author.id, restaurant_id);
            return Err(GourmetError::review_not_allowed(
                "User has already reviewed this restaurant",
            ));
        }

        let now = Utc::now();
        let review = Review::new(
            author.clone(),
            request.content,
            request.rating,
            Photo::from_urls(request.photo_ids, now),
            now,
        );
        let review_id = review.id.clone();
        restaurant.add_review(review);

        let saved = self.restaurant_repository.save(&restaurant).await?;
        self.invalidate(Mutation::CreateReview, restaurant_id).await;

        info!(
            "Review {} created on {}, average rating now {}",
            review_id, restaurant_id, saved.average_rating
        );
        read_back(&saved, &review_id)
    }

    async fn list_reviews(
        &self,
        restaurant_id: &RestaurantId,
        page: PageRequest,
        sort: Option<ReviewSort>,
    ) -> GourmetResult<Page<Review>> {
        debug!(
            "Listing reviews of {}, page: {}, size: {}",
            restaurant_id, page.page, page.size
        );

        let key = cache_keys::review_list(restaurant_id, page, sort.as_ref());
        self.cache
            .get_or_set(CacheRegion::ReviewList, &key, || async move {
                let mut reviews = self.load_restaurant(restaurant_id).await?.reviews;
                sort.unwrap_or_default().apply(&mut reviews);
                Ok(Page::from_vec(reviews, page))
            })
            .await
    }

    async fn get_review(
        &self,
        restaurant_id: &RestaurantId,
        review_id: &ReviewId,
    ) -> GourmetResult<Option<Review>> {
        debug!("Getting review {} of {}", review_id, restaurant_id);

        let key = cache_keys::review_by_id(restaurant_id, review_id);

        match self.cache.get::<Review>(CacheRegion::Review, &key).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for review {}: {}", review_id, e),
        }

        let restaurant = self.load_restaurant(restaurant_id).await?;
        let review = restaurant.find_review(review_id).cloned();

        if let Some(found) = &review {
            let _ = self.cache.set(CacheRegion::Review, &key, found).await;
        }

        Ok(review)
    }

    async fn update_review(
        &self,
        author: &User,
        restaurant_id: &RestaurantId,
        review_id: &ReviewId,
        request: ReviewCreateUpdateRequest,
    ) -> GourmetResult<Review> {
        debug!("Updating review {} on {} by {}", review_id, restaurant_id, author.id);

        request.validate_request()?;

        let mut restaurant = self.load_restaurant(restaurant_id).await?;

        let mut review = restaurant
            .find_review(review_id)
            .cloned()
            .ok_or_else(|| GourmetError::review_not_allowed("Review does not exist"))?;

        if !review.is_authored_by(&author.id) {
            warn!(
                "User {} tried to edit review {} written by {}",
                author.id, review_id, review.written_by.id
            );
            return Err(GourmetError::review_not_allowed(
                "Only the author can edit a review",
            ));
        }

        let now = Utc::now();
        if !review.is_editable_at(now, self.edit_window()) {
            return Err(GourmetError::review_not_allowed(format!(
                "Reviews can only be edited within {} hours of posting",
                self.edit_window_hours
            )));
        }

        review.edit(
            request.content,
            request.rating,
            Photo::from_urls(request.photo_ids, now),
            now,
        );
        restaurant.replace_review(review);

        let saved = self.restaurant_repository.save(&restaurant).await?;
        self.invalidate(Mutation::UpdateReview, restaurant_id).await;

        info!(
            "Review {} updated on {}, average rating now {}",
            review_id, restaurant_id, saved.average_rating
        );
        read_back(&saved, review_id)
    }

    async fn delete_review(
        &self,
        restaurant_id: &RestaurantId,
        review_id: &ReviewId,
    ) -> GourmetResult<()> {
        debug!("Deleting review {} from {}", review_id, restaurant_id);

        let mut restaurant = self.load_restaurant(restaurant_id).await?;
        let removed = restaurant.remove_review(review_id);

        let saved = self.restaurant_repository.save(&restaurant).await?;
        self.invalidate(Mutation::DeleteReview, restaurant_id).await;

        info!(
            "Review {} deleted from {} (present: {}), average rating now {}",
            review_id, restaurant_id, removed, saved.average_rating
        );
        Ok(())
    }
}

impl std::fmt::Debug for ReviewServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewServiceComponent")
            .field("edit_window_hours", &self.edit_window_hours)
            .finish_non_exhaustive()
    }
}
