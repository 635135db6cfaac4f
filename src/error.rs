// ABOUTME: Error types for listing routes.
// ABOUTME: Provides RouteError with NotFound and InvalidResponse variants.

use thiserror::Error;

/// Errors a route handler can surface to the host.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The upstream site produced no usable response (network failure,
    /// non-success status, or the cache layer reported nothing).
    #[error("not found: {0}")]
    NotFound(String),

    /// The upstream site answered but the content is unusable.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RouteError {
    /// Creates a NotFound error with a custom message.
    pub fn not_found(msg: impl Into<String>) -> Self {
        RouteError::NotFound(msg.into())
    }

    /// Creates an InvalidResponse error with a custom message.
    pub fn invalid_response(msg: impl Into<String>) -> Self {
        RouteError::InvalidResponse(msg.into())
    }

    /// Returns true if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound(_))
    }

    /// Returns true if this is an InvalidResponse error.
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, RouteError::InvalidResponse(_))
    }
}
