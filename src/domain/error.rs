//! Error types for the marketplace pane.
//!
//! This module defines the centralized error type [`MarketplaceError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All errors
//! are implemented using the `thiserror` crate for automatic `Error` trait
//! implementation.
//!
//! The marketplace row itself never fails. Errors raised while loading a listing,
//! loading a theme, or running an install command reach the row only as the
//! entry's display `error` string.

use thiserror::Error;

/// The main error type for marketplace pane operations.
///
/// # Examples
///
/// ```
/// use marketplace_pane::MarketplaceError;
///
/// fn validate_listing() -> Result<(), MarketplaceError> {
///     Err(MarketplaceError::Listing("entry 3 has no id".to_string()))
/// }
///
/// assert!(validate_listing().is_err());
/// ```
#[derive(Debug, Error)]
pub enum MarketplaceError {
    /// The marketplace listing is malformed.
    ///
    /// Occurs when a listing document parses as JSON but does not describe
    /// valid entries (missing required keys, wrong types).
    #[error("Listing error: {0}")]
    Listing(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The install command for a plugin failed or could not be started.
    ///
    /// The message is shown verbatim in the row's error area.
    #[error("Install error: {0}")]
    Install(String),
}

/// A specialized `Result` type for marketplace operations.
pub type Result<T> = std::result::Result<T, MarketplaceError>;
