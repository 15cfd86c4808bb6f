//! Cache interface trait for region-partitioned read caching.

use async_trait::async_trait;
use gourmet_core::{GourmetResult, Interface};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt;
use tracing::warn;

/// A named partition of the read cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheRegion {
    /// Single restaurant by id.
    Restaurant,
    /// Restaurant search result pages.
    RestaurantSearch,
    /// Single review.
    Review,
    /// Review list pages.
    ReviewList,
}

impl CacheRegion {
    pub const ALL: [Self; 4] = [
        Self::Restaurant,
        Self::RestaurantSearch,
        Self::Review,
        Self::ReviewList,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Restaurant => "restaurant",
            Self::RestaurantSearch => "restaurants",
            Self::Review => "review",
            Self::ReviewList => "reviews",
        }
    }
}

impl fmt::Display for CacheRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cache interface for storing and retrieving cached reads.
///
/// Values are stored as JSON strings to keep the trait dyn-compatible.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from a region.
    async fn get_raw(&self, region: CacheRegion, key: &str) -> GourmetResult<Option<String>>;

    /// Store a raw JSON value in a region, replacing any previous entry.
    async fn set_raw(&self, region: CacheRegion, key: &str, value: &str) -> GourmetResult<()>;

    /// Remove one entry. Returns `true` if it existed.
    async fn evict(&self, region: CacheRegion, key: &str) -> GourmetResult<bool>;

    /// Remove every entry in a region. Returns the number removed.
    async fn clear_region(&self, region: CacheRegion) -> GourmetResult<u64>;

    /// Number of entries currently held in a region.
    fn len(&self, region: CacheRegion) -> usize;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Typed helpers over [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from a region.
    async fn get<T: DeserializeOwned + Send>(
        &self,
        region: CacheRegion,
        key: &str,
    ) -> GourmetResult<Option<T>> {
        match self.get_raw(region, key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in a region.
    async fn set<T: Serialize + Send + Sync>(
        &self,
        region: CacheRegion,
        key: &str,
        value: &T,
    ) -> GourmetResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(region, key, &json).await
    }

    /// Get a value or compute and cache it if not present.
    ///
    /// A failing cache read counts as a miss and a failing cache write is
    /// dropped; only `factory` errors reach the caller.
    async fn get_or_set<T, F, Fut>(
        &self,
        region: CacheRegion,
        key: &str,
        factory: F,
    ) -> GourmetResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = GourmetResult<T>> + Send,
    {
        match self.get::<T>(region, key).await {
            Ok(Some(cached)) => return Ok(cached),
            Ok(None) => {}
            Err(e) => warn!("Cache read failed for {}:{}: {}", region, key, e),
        }

        let value = factory().await?;

        if let Err(e) = self.set(region, key, &value).await {
            warn!("Cache write failed for {}:{}: {}", region, key, e);
        }

        Ok(value)
    }
}

impl<T: CacheInterface + ?Sized> CacheExt for T {}
