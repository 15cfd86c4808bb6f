//! # Gourmet Service
//!
//! Restaurant and review use cases on top of the aggregate store.
//!
//! Every read path goes through the [`cache`] module; every mutation saves
//! the whole aggregate first and then evicts the cache regions it affects,
//! as declared by [`cache::InvalidationPolicy`].

pub mod cache;
pub mod di;
pub mod dto;
pub mod geolocation;
pub mod r#impl;
pub mod restaurant_service;
pub mod review_service;

pub use cache::*;
pub use dto::*;
pub use geolocation::*;
pub use r#impl::*;
pub use restaurant_service::*;
pub use review_service::*;
