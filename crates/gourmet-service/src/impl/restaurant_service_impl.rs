//! Restaurant service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, CacheInvalidator, CacheRegion, Mutation};
use crate::dto::{RestaurantCreateUpdateRequest, RestaurantSearchQuery, SearchRoute};
use crate::geolocation::GeoLocationResolver;
use crate::restaurant_service::RestaurantService;
use async_trait::async_trait;
use chrono::Utc;
use gourmet_core::{GourmetError, GourmetResult, Page, PageRequest, RestaurantId, ValidateExt};
use gourmet_domain::Restaurant;
use gourmet_repository::RestaurantRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Restaurant service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = RestaurantService)]
pub struct RestaurantServiceComponent {
    #[shaku(inject)]
    restaurant_repository: Arc<dyn RestaurantRepository>,
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(inject)]
    geolocation: Arc<dyn GeoLocationResolver>,
}

impl RestaurantServiceComponent {
    /// Wires the service by hand, outside a DI module.
    pub fn new(
        restaurant_repository: Arc<dyn RestaurantRepository>,
        cache: Arc<dyn CacheInterface>,
        geolocation: Arc<dyn GeoLocationResolver>,
    ) -> Self {
        Self {
            restaurant_repository,
            cache,
            geolocation,
        }
    }

    async fn run_search(
        &self,
        query: &RestaurantSearchQuery,
        page: PageRequest,
    ) -> GourmetResult<Page<Restaurant>> {
        let repository = &self.restaurant_repository;
        match query.route() {
            SearchRoute::MinRating(min_rating) => {
                repository.find_by_min_rating(min_rating, page).await
            }
            SearchRoute::Text { query, min_rating } => {
                repository
                    .find_by_query_and_min_rating(query, min_rating, page)
                    .await
            }
            SearchRoute::Near {
                latitude,
                longitude,
                radius,
            } => {
                repository
                    .find_by_location_near(latitude, longitude, radius, page)
                    .await
            }
            SearchRoute::All => repository.find_all(page).await,
        }
    }

    async fn invalidate(&self, mutation: Mutation, id: &RestaurantId) {
        CacheInvalidator::new(self.cache.as_ref())
            .invalidate(mutation, id)
            .await;
    }
}

#[async_trait]
impl RestaurantService for RestaurantServiceComponent {
    async fn create_restaurant(
        &self,
        request: RestaurantCreateUpdateRequest,
    ) -> GourmetResult<Restaurant> {
        debug!("Creating restaurant: {}", request.name);

        request.validate_request()?;

        let geo_location = self.geolocation.resolve(&request.address).await?;
        let restaurant = Restaurant::new(
            RestaurantId::generate(),
            request.into_details(geo_location, Utc::now()),
        );

        let saved = self.restaurant_repository.save(&restaurant).await?;
        self.invalidate(Mutation::CreateRestaurant, &saved.id).await;

        info!("Restaurant created: {}", saved.id);
        Ok(saved)
    }

    async fn search_restaurants(
        &self,
        query: &RestaurantSearchQuery,
        page: PageRequest,
    ) -> GourmetResult<Page<Restaurant>> {
        debug!(
            "Searching restaurants: {:?}, page: {}, size: {}",
            query, page.page, page.size
        );

        let key = cache_keys::restaurant_search(query, page);
        self.cache
            .get_or_set(CacheRegion::RestaurantSearch, &key, || {
                self.run_search(query, page)
            })
            .await
    }

    async fn get_restaurant(&self, id: &RestaurantId) -> GourmetResult<Option<Restaurant>> {
        debug!("Getting restaurant: {}", id);

        let key = cache_keys::restaurant_by_id(id);

        match self.cache.get::<Restaurant>(CacheRegion::Restaurant, &key).await {
            Ok(Some(cached)) => return Ok(Some(cached)),
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for restaurant {}: {}", id, e),
        }

        let restaurant = self.restaurant_repository.find_by_id(id).await?;

        // Absent results are not cached
        if let Some(found) = &restaurant {
            let _ = self.cache.set(CacheRegion::Restaurant, &key, found).await;
        }

        Ok(restaurant)
    }

    async fn update_restaurant(
        &self,
        id: &RestaurantId,
        request: RestaurantCreateUpdateRequest,
    ) -> GourmetResult<Restaurant> {
        debug!("Updating restaurant: {}", id);

        request.validate_request()?;

        let mut restaurant = self
            .restaurant_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| GourmetError::not_found("Restaurant", id))?;

        let geo_location = self.geolocation.resolve(&request.address).await?;
        restaurant.apply_details(request.into_details(geo_location, Utc::now()));

        let saved = self.restaurant_repository.save(&restaurant).await?;
        self.invalidate(Mutation::UpdateRestaurant, id).await;

        info!("Restaurant updated: {}", id);
        Ok(saved)
    }

    async fn delete_restaurant(&self, id: &RestaurantId) -> GourmetResult<()> {
        debug!("Deleting restaurant: {}", id);

        self.restaurant_repository.delete_by_id(id).await?;
        self.invalidate(Mutation::DeleteRestaurant, id).await;

        info!("Restaurant deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for RestaurantServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestaurantServiceComponent")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryCacheService;
    use gourmet_domain::{Address, ContactInformation, GeoPoint, OperatingHours, RestaurantDetails};
    use mockall::mock;

    mock! {
        pub Repository {}

        #[async_trait]
        impl RestaurantRepository for Repository {
            async fn find_by_id(&self, id: &RestaurantId) -> GourmetResult<Option<Restaurant>>;
            async fn save(&self, restaurant: &Restaurant) -> GourmetResult<Restaurant>;
            async fn delete_by_id(&self, id: &RestaurantId) -> GourmetResult<()>;
            async fn find_by_min_rating(
                &self,
                min_rating: f32,
                page: PageRequest,
            ) -> GourmetResult<Page<Restaurant>>;
            async fn find_by_query_and_min_rating(
                &self,
                query: &str,
                min_rating: f32,
                page: PageRequest,
            ) -> GourmetResult<Page<Restaurant>>;
            async fn find_by_location_near(
                &self,
                latitude: f64,
                longitude: f64,
                radius_km: f64,
                page: PageRequest,
            ) -> GourmetResult<Page<Restaurant>>;
            async fn find_all(&self, page: PageRequest) -> GourmetResult<Page<Restaurant>>;
        }
    }

    mock! {
        pub Resolver {}

        #[async_trait]
        impl GeoLocationResolver for Resolver {
            async fn resolve(&self, address: &Address) -> GourmetResult<GeoPoint>;
        }
    }

    const SOHO: GeoPoint = GeoPoint::new(51.5136, -0.1365);

    fn address() -> Address {
        Address {
            street_number: "49".to_string(),
            street_name: "Frith Street".to_string(),
            unit: None,
            city: "London".to_string(),
            state: String::new(),
            postal_code: "W1D 4SG".to_string(),
            country: "United Kingdom".to_string(),
        }
    }

    fn contact() -> ContactInformation {
        ContactInformation {
            phone: "+44 20 7437 0000".to_string(),
            email: "hello@example.com".to_string(),
            website: None,
        }
    }

    fn request(name: &str) -> RestaurantCreateUpdateRequest {
        RestaurantCreateUpdateRequest {
            name: name.to_string(),
            cuisine_type: "Italian".to_string(),
            contact_information: contact(),
            address: address(),
            operating_hours: OperatingHours::default(),
            photo_ids: vec!["front.jpg".to_string()],
        }
    }

    fn stored(name: &str) -> Restaurant {
        let mut restaurant = Restaurant::new(
            RestaurantId::from("r-1"),
            RestaurantDetails {
                name: name.to_string(),
                cuisine_type: "Italian".to_string(),
                contact_information: contact(),
                address: address(),
                geo_location: SOHO,
                operating_hours: OperatingHours::default(),
                photos: Vec::new(),
            },
        );
        restaurant.version = 1;
        restaurant
    }

    fn fixed_resolver() -> MockResolver {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().returning(|_| Ok(SOHO));
        resolver
    }

    fn service(
        repository: MockRepository,
        resolver: MockResolver,
        cache: Arc<InMemoryCacheService>,
    ) -> RestaurantServiceComponent {
        RestaurantServiceComponent::new(Arc::new(repository), cache, Arc::new(resolver))
    }

    #[tokio::test]
    async fn test_create_saves_geolocated_restaurant() {
        let mut repository = MockRepository::new();
        repository
            .expect_save()
            .withf(|r| r.version == 0 && r.average_rating == 0.0 && r.reviews.is_empty())
            .times(1)
            .returning(|r| {
                let mut saved = r.clone();
                saved.version = 1;
                Ok(saved)
            });
        let cache = Arc::new(InMemoryCacheService::new());
        let service = service(repository, fixed_resolver(), cache);

        let created = service.create_restaurant(request("Barrafina")).await.unwrap();

        assert_eq!(created.name, "Barrafina");
        assert_eq!(created.geo_location, SOHO);
        assert_eq!(created.photos.len(), 1);
        assert_eq!(created.version, 1);
    }

    #[tokio::test]
    async fn test_create_invalid_request_touches_nothing() {
        let mut resolver = MockResolver::new();
        resolver.expect_resolve().times(0);
        let mut repository = MockRepository::new();
        repository.expect_save().times(0);
        let service = service(repository, resolver, Arc::new(InMemoryCacheService::new()));

        let result = service.create_restaurant(request("")).await;
        assert!(matches!(result, Err(GourmetError::Validation(_))));
    }

    #[tokio::test]
    async fn test_geolocation_failure_persists_nothing() {
        let mut resolver = MockResolver::new();
        resolver
            .expect_resolve()
            .returning(|_| Err(GourmetError::external("geolocation", "timeout")));
        let mut repository = MockRepository::new();
        repository.expect_save().times(0);
        let cache = Arc::new(InMemoryCacheService::new());
        cache
            .set_raw(CacheRegion::RestaurantSearch, "page", "{}")
            .await
            .unwrap();
        let service = service(repository, resolver, cache.clone());

        let result = service.create_restaurant(request("Barrafina")).await;

        assert!(matches!(result, Err(GourmetError::ExternalService { .. })));
        assert_eq!(cache.len(CacheRegion::RestaurantSearch), 1);
    }

    #[tokio::test]
    async fn test_failed_save_evicts_nothing() {
        let mut repository = MockRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Ok(Some(stored("Bocca di Lupo"))));
        repository
            .expect_save()
            .returning(|_| Err(GourmetError::Database("connection reset".to_string())));
        let cache = Arc::new(InMemoryCacheService::new());
        let id = RestaurantId::from("r-1");
        let key = cache_keys::restaurant_by_id(&id);
        cache
            .set(CacheRegion::Restaurant, &key, &stored("Bocca di Lupo"))
            .await
            .unwrap();
        cache
            .set_raw(CacheRegion::RestaurantSearch, "page", "{}")
            .await
            .unwrap();
        let service = service(repository, fixed_resolver(), cache.clone());

        let result = service.update_restaurant(&id, request("Renamed")).await;

        assert!(matches!(result, Err(GourmetError::Database(_))));
        assert_eq!(cache.len(CacheRegion::Restaurant), 1);
        assert_eq!(cache.len(CacheRegion::RestaurantSearch), 1);
    }

    #[tokio::test]
    async fn test_update_missing_restaurant_is_not_found() {
        let mut repository = MockRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_save().times(0);
        let service = service(repository, fixed_resolver(), Arc::new(InMemoryCacheService::new()));

        let result = service
            .update_restaurant(&RestaurantId::from("ghost"), request("Renamed"))
            .await;

        match result {
            Err(GourmetError::NotFound { resource_type, id }) => {
                assert_eq!(resource_type, "Restaurant");
                assert_eq!(id, "ghost");
            }
            other => panic!("Expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_keeps_reviews_and_rating() {
        let mut existing = stored("Bocca di Lupo");
        existing.average_rating = 4.5;
        let mut repository = MockRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repository.expect_save().returning(|r| {
            let mut saved = r.clone();
            saved.version += 1;
            Ok(saved)
        });
        let service = service(repository, fixed_resolver(), Arc::new(InMemoryCacheService::new()));

        let updated = service
            .update_restaurant(&RestaurantId::from("r-1"), request("Renamed"))
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.average_rating, 4.5);
        assert_eq!(updated.version, 2);
    }

    #[tokio::test]
    async fn test_min_rating_with_empty_query_uses_rating_filter() {
        let mut repository = MockRepository::new();
        repository
            .expect_find_by_min_rating()
            .withf(|min_rating, _| (*min_rating - 4.0).abs() < f32::EPSILON)
            .times(1)
            .returning(|_, page| Ok(Page::from_vec(vec![stored("Top")], page)));
        let service = service(repository, fixed_resolver(), Arc::new(InMemoryCacheService::new()));

        let query = RestaurantSearchQuery {
            query: Some(String::new()),
            min_rating: Some(4.0),
            ..RestaurantSearchQuery::default()
        };
        let page = service
            .search_restaurants(&query, PageRequest::first())
            .await
            .unwrap();

        assert_eq!(page.total_elements(), 1);
    }

    #[tokio::test]
    async fn test_text_query_defaults_min_rating_to_zero() {
        let mut repository = MockRepository::new();
        repository
            .expect_find_by_query_and_min_rating()
            .withf(|query, min_rating, _| query == "pizza" && *min_rating == 0.0)
            .times(1)
            .returning(|_, _, page| Ok(Page::from_vec(Vec::new(), page)));
        let service = service(repository, fixed_resolver(), Arc::new(InMemoryCacheService::new()));

        let query = RestaurantSearchQuery {
            query: Some("pizza".to_string()),
            latitude: Some(51.5),
            longitude: Some(-0.1),
            radius: Some(1.0),
            ..RestaurantSearchQuery::default()
        };
        let page = service
            .search_restaurants(&query, PageRequest::first())
            .await
            .unwrap();

        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_search_pages_are_cached() {
        let mut repository = MockRepository::new();
        repository
            .expect_find_all()
            .times(1)
            .returning(|page| Ok(Page::from_vec(vec![stored("Only")], page)));
        let cache = Arc::new(InMemoryCacheService::new());
        let service = service(repository, fixed_resolver(), cache.clone());

        let query = RestaurantSearchQuery::default();
        let first = service.search_restaurants(&query, PageRequest::first()).await.unwrap();
        let second = service.search_restaurants(&query, PageRequest::first()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.len(CacheRegion::RestaurantSearch), 1);
    }

    #[tokio::test]
    async fn test_get_is_cached_but_absence_is_not() {
        let mut repository = MockRepository::new();
        repository
            .expect_find_by_id()
            .withf(|id| id.as_str() == "r-1")
            .times(1)
            .returning(|_| Ok(Some(stored("Cached"))));
        repository
            .expect_find_by_id()
            .withf(|id| id.as_str() == "ghost")
            .times(2)
            .returning(|_| Ok(None));
        let service = service(repository, fixed_resolver(), Arc::new(InMemoryCacheService::new()));

        for _ in 0..2 {
            let found = service.get_restaurant(&RestaurantId::from("r-1")).await.unwrap();
            assert_eq!(found.map(|r| r.name), Some("Cached".to_string()));

            let missing = service.get_restaurant(&RestaurantId::from("ghost")).await.unwrap();
            assert!(missing.is_none());
        }
    }

    #[tokio::test]
    async fn test_disabled_cache_always_reads_store() {
        let mut repository = MockRepository::new();
        repository
            .expect_find_by_id()
            .times(2)
            .returning(|_| Ok(Some(stored("Uncached"))));
        let service = service(
            repository,
            fixed_resolver(),
            Arc::new(InMemoryCacheService::disabled()),
        );

        for _ in 0..2 {
            assert!(service
                .get_restaurant(&RestaurantId::from("r-1"))
                .await
                .unwrap()
                .is_some());
        }
    }

    #[tokio::test]
    async fn test_delete_evicts_entry_and_search_pages() {
        let mut repository = MockRepository::new();
        repository.expect_delete_by_id().times(1).returning(|_| Ok(()));
        let cache = Arc::new(InMemoryCacheService::new());
        let id = RestaurantId::from("r-1");
        cache
            .set(CacheRegion::Restaurant, &cache_keys::restaurant_by_id(&id), &stored("Gone"))
            .await
            .unwrap();
        cache
            .set_raw(CacheRegion::RestaurantSearch, "page", "{}")
            .await
            .unwrap();
        let service = service(repository, fixed_resolver(), cache.clone());

        service.delete_restaurant(&id).await.unwrap();

        assert_eq!(cache.len(CacheRegion::Restaurant), 0);
        assert_eq!(cache.len(CacheRegion::RestaurantSearch), 0);
    }
}
