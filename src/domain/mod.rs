//! Domain layer for the marketplace pane.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Marketplace listing entries and their JSON form
//!
//! # Examples
//!
//! ```
//! use marketplace_pane::domain::{parse_listing, Result};
//!
//! fn first_name(json: &str) -> Result<String> {
//!     let entries = parse_listing(json)?;
//!     Ok(entries.first().map(|e| e.name.clone()).unwrap_or_default())
//! }
//! ```

pub mod error;
pub mod listing;

pub use error::{MarketplaceError, Result};
pub use listing::{load_listing, parse_listing, InstallState, ListingEntry};
