//! Address → coordinates resolution.

use async_trait::async_trait;
use gourmet_config::GeoLocationConfig;
use gourmet_core::{GourmetError, GourmetResult, Interface};
use gourmet_domain::{Address, GeoPoint};
use rand::Rng;
use shaku::Component;
use tracing::debug;

/// Resolves a postal address to a point. Failures are propagated to the
/// caller, never retried.
#[async_trait]
pub trait GeoLocationResolver: Interface + Send + Sync {
    async fn resolve(&self, address: &Address) -> GourmetResult<GeoPoint>;
}

/// Resolver that ignores the address and returns a uniformly random point
/// inside a bounding box. Stands in for a real geocoder in demos and tests.
#[derive(Component)]
#[shaku(interface = GeoLocationResolver)]
pub struct RandomGeoLocationResolver {
    #[shaku(default)]
    bounds: GeoLocationConfig,
}

impl RandomGeoLocationResolver {
    #[must_use]
    pub fn new(bounds: GeoLocationConfig) -> Self {
        Self { bounds }
    }

    fn random_point(&self) -> GeoPoint {
        let mut rng = rand::thread_rng();
        GeoPoint::new(
            rng.gen_range(self.bounds.min_latitude..=self.bounds.max_latitude),
            rng.gen_range(self.bounds.min_longitude..=self.bounds.max_longitude),
        )
    }
}

impl Default for RandomGeoLocationResolver {
    fn default() -> Self {
        Self::new(GeoLocationConfig::default())
    }
}

#[async_trait]
impl GeoLocationResolver for RandomGeoLocationResolver {
    async fn resolve(&self, address: &Address) -> GourmetResult<GeoPoint> {
        if !self.bounds.is_valid() {
            return Err(GourmetError::external(
                "geolocation",
                format!("invalid bounding box {:?}", self.bounds),
            ));
        }

        let point = self.random_point();
        debug!("Resolved '{}' to ({}, {})", address, point.lat, point.lon);
        Ok(point)
    }
}
