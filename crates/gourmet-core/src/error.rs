//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Gourmet.
///
/// Business-rule rejections (`NotFound`, `ReviewNotAllowed`, `Validation`) are
/// caller-correctable. Upstream failures (`Database`, `ExternalService`) are
/// propagated unchanged. `Internal` marks an invariant broken inside the core.
#[derive(Error, Debug)]
pub enum GourmetError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Review rule violation (duplicate, wrong author, edit window closed, missing review)
    #[error("Review not allowed: {0}")]
    ReviewNotAllowed(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Concurrent modification detected at save time
    #[error("Conflict: {0}")]
    Conflict(String),

    // ============ Infrastructure Errors ============
    /// Document store error
    #[error("Database error: {0}")]
    Database(String),

    /// External collaborator error (geolocation)
    #[error("External service error: {service} - {message}")]
    ExternalService { service: String, message: String },

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GourmetError {
    /// Returns the HTTP status code a transport layer should map this error to.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::ReviewNotAllowed(_) | Self::Validation(_) => 400,
            Self::Conflict(_) => 409,
            Self::ExternalService { .. } => 502,
            Self::Database(_)
            | Self::Cache(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::ReviewNotAllowed(_) => "REVIEW_NOT_ALLOWED",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::ExternalService { .. } => "EXTERNAL_SERVICE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a review rule violation.
    #[must_use]
    pub fn review_not_allowed<T: Into<String>>(message: T) -> Self {
        Self::ReviewNotAllowed(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an external service error.
    #[must_use]
    pub fn external<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error came from the store or an external collaborator.
    #[must_use]
    pub const fn is_upstream_failure(&self) -> bool {
        matches!(self, Self::Database(_) | Self::ExternalService { .. })
    }

    /// Checks if the caller may retry the whole operation.
    ///
    /// The core itself never retries.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(
            self,
            Self::Conflict(_) | Self::Database(_) | Self::ExternalService { .. }
        )
    }
}

impl From<serde_json::Error> for GourmetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error body for a transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `GourmetError`.
    #[must_use]
    pub fn from_error(error: &GourmetError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&GourmetError> for ErrorResponse {
    fn from(error: &GourmetError) -> Self {
        Self::from_error(error)
    }
}
