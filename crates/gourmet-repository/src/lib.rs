//! # Gourmet Repository
//!
//! The aggregate store gateway:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn RestaurantRepository>   (gateway interface)
//! InMemoryRestaurantRepository         (document store, version-checked saves)
//! ```
//!
//! The gateway only loads, saves and queries whole restaurant documents;
//! review rules live in the service layer and derived ratings in the domain.

pub mod in_memory;
pub mod traits;

pub use in_memory::InMemoryRestaurantRepository;
pub use traits::*;
