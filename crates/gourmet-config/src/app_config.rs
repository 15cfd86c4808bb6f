//! Application configuration structures.

use gourmet_core::TracingConfig;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Logging configuration.
    #[serde(default)]
    pub observability: TracingConfig,

    /// Read cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Geolocation resolver configuration.
    #[serde(default)]
    pub geolocation: GeoLocationConfig,

    /// Review policy.
    #[serde(default)]
    pub reviews: ReviewPolicyConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "gourmet-search".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Read cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Enable the in-process read cache.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Bounding box used by the random geolocation resolver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoLocationConfig {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl Default for GeoLocationConfig {
    // Greater London
    fn default() -> Self {
        Self {
            min_latitude: 51.28,
            max_latitude: 51.686,
            min_longitude: -0.489,
            max_longitude: 0.236,
        }
    }
}

impl GeoLocationConfig {
    /// Returns true if both ranges are non-empty and within WGS84 bounds.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.min_latitude)
            && (-90.0..=90.0).contains(&self.max_latitude)
            && (-180.0..=180.0).contains(&self.min_longitude)
            && (-180.0..=180.0).contains(&self.max_longitude)
            && self.min_latitude <= self.max_latitude
            && self.min_longitude <= self.max_longitude
    }
}

/// Review policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewPolicyConfig {
    /// Hours after posting during which the author may edit a review.
    pub edit_window_hours: i64,
}

impl Default for ReviewPolicyConfig {
    fn default() -> Self {
        Self {
            edit_window_hours: 48,
        }
    }
}
