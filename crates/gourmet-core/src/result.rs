//! Result type aliases for Gourmet.

use crate::GourmetError;

/// A specialized `Result` type for Gourmet operations.
pub type GourmetResult<T> = Result<T, GourmetError>;
