//! Dependency injection module using Shaku.
//!
//! `InMemoryModule` wires the whole core inside one process: the in-memory
//! aggregate store, the in-process read cache, the random geolocation
//! resolver and both services.

use crate::cache::{InMemoryCacheService, InMemoryCacheServiceParameters};
use crate::geolocation::{RandomGeoLocationResolver, RandomGeoLocationResolverParameters};
use crate::r#impl::{
    RestaurantServiceComponent, ReviewServiceComponent, ReviewServiceComponentParameters,
};
use gourmet_config::AppConfig;
use gourmet_core::{GourmetError, GourmetResult};
use gourmet_repository::InMemoryRestaurantRepository;
use parking_lot::RwLock;
use shaku::module;
use std::sync::Arc;
use tracing::info;

module! {
    pub InMemoryModule {
        components = [
            InMemoryRestaurantRepository,
            InMemoryCacheService,
            RandomGeoLocationResolver,
            RestaurantServiceComponent,
            ReviewServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the in-process module from application configuration.
pub fn build_in_memory_module(config: &AppConfig) -> GourmetResult<Arc<InMemoryModule>> {
    if !config.geolocation.is_valid() {
        return Err(GourmetError::Configuration(
            "Geolocation bounding box must be ordered and within WGS84 bounds".to_string(),
        ));
    }
    if config.reviews.edit_window_hours <= 0 {
        return Err(GourmetError::Configuration(
            "Review edit window must be positive".to_string(),
        ));
    }

    let module = InMemoryModule::builder()
        .with_component_parameters::<InMemoryCacheService>(InMemoryCacheServiceParameters {
            enabled: config.cache.enabled,
            regions: RwLock::default(),
        })
        .with_component_parameters::<RandomGeoLocationResolver>(
            RandomGeoLocationResolverParameters {
                bounds: config.geolocation,
            },
        )
        .with_component_parameters::<ReviewServiceComponent>(ReviewServiceComponentParameters {
            edit_window_hours: config.reviews.edit_window_hours,
        })
        .build();

    info!(
        "Built in-memory module (cache enabled: {}, edit window: {}h)",
        config.cache.enabled, config.reviews.edit_window_hours
    );
    Ok(Arc::new(module))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheInterface, CacheRegion};
    use crate::{RestaurantService, ReviewService};
    use gourmet_core::RestaurantId;
    use gourmet_repository::RestaurantRepository;
    use shaku::HasComponent;

    #[test]
    fn test_components_share_singletons() {
        let module = build_in_memory_module(&AppConfig::default()).unwrap();

        let a: Arc<dyn CacheInterface> = module.resolve();
        let b: Arc<dyn CacheInterface> = module.resolve();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_enabled());
    }

    #[test]
    fn test_cache_can_be_disabled() {
        let mut config = AppConfig::default();
        config.cache.enabled = false;
        let module = build_in_memory_module(&config).unwrap();

        let cache: Arc<dyn CacheInterface> = module.resolve();
        assert!(!cache.is_enabled());
    }

    #[test]
    fn test_invalid_edit_window_rejected() {
        let mut config = AppConfig::default();
        config.reviews.edit_window_hours = 0;
        assert!(matches!(
            build_in_memory_module(&config),
            Err(GourmetError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_services_resolve_and_share_store() {
        let module = build_in_memory_module(&AppConfig::default()).unwrap();
        let restaurants: Arc<dyn RestaurantService> = module.resolve();
        let reviews: Arc<dyn ReviewService> = module.resolve();
        let repository: Arc<dyn RestaurantRepository> = module.resolve();
        let cache: Arc<dyn CacheInterface> = module.resolve();

        let missing = RestaurantId::from("ghost");
        assert!(restaurants.get_restaurant(&missing).await.unwrap().is_none());
        assert!(repository.find_by_id(&missing).await.unwrap().is_none());
        assert!(reviews
            .list_reviews(&missing, gourmet_core::PageRequest::first(), None)
            .await
            .is_err());
        assert_eq!(cache.len(CacheRegion::ReviewList), 0);
    }
}
