//! # Store Error Types
//!
//! Typed error handling for the reef-store core.
//! Every error here is recovered at the boundary where it occurs; nothing
//! propagates to a global handler or tears down a buyer session.

use thiserror::Error;

/// Core error type for storefront operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Buyer input rejected at confirmation (e.g. blank game id)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Payment-image fetch failed; callers fall back to opening the
    /// image location directly instead of surfacing this to the buyer
    #[error("Asset retrieval failed: {0}")]
    AssetRetrieval(String),

    /// Product not found in catalog
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: String },

    /// Buyer session expired or never existed
    #[error("Session not found: {session_id}")]
    SessionNotFound { session_id: String },

    /// Configuration errors (missing env vars, malformed values)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog file could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl StoreError {
    /// Returns true if the buyer can recover by correcting input or
    /// taking the fallback path
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            StoreError::Validation(_) | StoreError::AssetRetrieval(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Validation(_) => 400,
            StoreError::AssetRetrieval(_) => 502,
            StoreError::ProductNotFound { .. } => 404,
            StoreError::SessionNotFound { .. } => 404,
            StoreError::Configuration(_) => 500,
            StoreError::Catalog(_) => 500,
        }
    }
}

/// Result type alias for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors() {
        assert!(StoreError::Validation("blank buyer id".into()).is_recoverable());
        assert!(StoreError::AssetRetrieval("timeout".into()).is_recoverable());
        assert!(!StoreError::SessionNotFound {
            session_id: "x".into()
        }
        .is_recoverable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::Validation("test".into()).status_code(), 400);
        assert_eq!(
            StoreError::ProductNotFound {
                product_id: "x".into()
            }
            .status_code(),
            404
        );
        assert_eq!(
            StoreError::AssetRetrieval("cors".into()).status_code(),
            502
        );
    }
}
