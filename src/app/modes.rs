//! Input mode state types.
//!
//! The pane is in one of two input modes:
//! - **Normal**: navigate rows, activate controls, open the filter
//! - **Search**: filter the listing, either typing the query or navigating
//!   the filtered rows
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::app::modes::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert_ne!(mode, InputMode::Normal);
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keys edit the filter query.
    Typing,

    /// Keys navigate and activate filtered rows; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
///
/// Determines active keybindings, search bar visibility, and footer hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// j/k (navigate), Enter (primary control), u (update), / (filter), q (close).
    Normal,

    /// Filtering the listing.
    Search(SearchFocus),
}
