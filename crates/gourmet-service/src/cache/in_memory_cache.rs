//! In-process cache implementation.

use super::{CacheInterface, CacheRegion};
use async_trait::async_trait;
use gourmet_core::GourmetResult;
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use tracing::debug;

/// Region-partitioned cache held in process memory.
///
/// Entries never expire on their own; they are removed only by eviction.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct InMemoryCacheService {
    #[shaku(default = true)]
    enabled: bool,
    #[shaku(default)]
    regions: RwLock<HashMap<CacheRegion, HashMap<String, String>>>,
}

impl InMemoryCacheService {
    /// Create an enabled, empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            regions: RwLock::new(HashMap::new()),
        }
    }

    /// Create a no-op cache. Every read misses and every write is dropped.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            regions: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInterface for InMemoryCacheService {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn get_raw(&self, region: CacheRegion, key: &str) -> GourmetResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let value = self
            .regions
            .read()
            .get(&region)
            .and_then(|entries| entries.get(key))
            .cloned();

        match &value {
            Some(_) => debug!("Cache hit for {}:{}", region, key),
            None => debug!("Cache miss for {}:{}", region, key),
        }

        Ok(value)
    }

    async fn set_raw(&self, region: CacheRegion, key: &str, value: &str) -> GourmetResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        self.regions
            .write()
            .entry(region)
            .or_default()
            .insert(key.to_string(), value.to_string());

        debug!("Cached {}:{}", region, key);
        Ok(())
    }

    async fn evict(&self, region: CacheRegion, key: &str) -> GourmetResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let removed = self
            .regions
            .write()
            .get_mut(&region)
            .is_some_and(|entries| entries.remove(key).is_some());

        debug!("Evicted {}:{}: {}", region, key, removed);
        Ok(removed)
    }

    async fn clear_region(&self, region: CacheRegion) -> GourmetResult<u64> {
        if !self.is_enabled() {
            return Ok(0);
        }

        let cleared = self
            .regions
            .write()
            .remove(&region)
            .map_or(0, |entries| entries.len() as u64);

        debug!("Cleared {} entries from region {}", cleared, region);
        Ok(cleared)
    }

    fn len(&self, region: CacheRegion) -> usize {
        self.regions.read().get(&region).map_or(0, HashMap::len)
    }
}
