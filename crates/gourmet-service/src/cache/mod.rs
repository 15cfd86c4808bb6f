//! Read cache for the service layer.
//!
//! Entries live in named regions. Reads are cache-first; mutations evict
//! according to a static table, only after the aggregate was persisted.

mod cache_interface;
pub mod cache_keys;
mod in_memory_cache;
mod invalidation;

pub use cache_interface::{CacheExt, CacheInterface, CacheRegion};
pub use in_memory_cache::{InMemoryCacheService, InMemoryCacheServiceParameters};
pub use invalidation::{CacheInvalidator, Eviction, InvalidationPolicy, Mutation};
