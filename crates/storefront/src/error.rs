//! Unified error handling for the storefront.
//!
//! Provides a unified `AppError` type for the context-level handlers in
//! [`crate::state`]. Store operations themselves are total and infallible;
//! only the network boundary and the UI-side policy checks produce errors,
//! and the UI renders their display messages as-is.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::session::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog endpoint operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Invalid request from the calling view.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
