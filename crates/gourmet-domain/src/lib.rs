//! # Gourmet Domain
//!
//! The Restaurant aggregate: a restaurant document with its embedded
//! reviews and photos, treated as one consistency and storage unit.

pub mod entities;
pub mod rating;
pub mod value_objects;

pub use entities::*;
pub use rating::*;
pub use value_objects::*;
