//! # Gourmet Core
//!
//! Core types, errors, and pagination primitives for Gourmet restaurant search.
//! This crate provides the foundational abstractions shared by the domain,
//! repository, and service layers.

pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use telemetry::{init_tracing, LogFormat, TracingConfig};
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
