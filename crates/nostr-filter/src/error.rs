//! Error types for filter serialization.

use thiserror::Error;

/// A specialized Result type for filter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering a filter.
///
/// Building a filter never fails. Encoding only returns an error because the
/// JSON writer's signature does; none of the filter's field types can make it
/// fail in practice.
#[derive(Debug, Error)]
pub enum Error {
    /// The JSON encoder rejected the value.
    #[error("failed to encode filter: {0}")]
    Json(#[from] serde_json::Error),
}
