//! View model types representing renderable UI state.
//!
//! View models are computed from application state via
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data. Each listing row is carried as its
//! fully derived [`ItemView`].

use crate::ui::item_view::ItemView;

/// Complete UI view model for rendering the marketplace pane.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Visible rows, in listing order.
    pub display_items: Vec<DisplayItem>,

    /// Header information (title, entry count).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Optional empty state message (when no rows are visible).
    pub empty_state: Option<EmptyState>,

    /// Optional search bar information (when in search mode).
    pub search_bar: Option<SearchBarInfo>,
}

/// One listing row in the visible window.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Derived row view.
    pub view: ItemView,

    /// Whether this row is currently selected.
    pub is_selected: bool,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "j/k: navigate  Enter: install").
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No plugins found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
