//! Application state management and view model computation.
//!
//! [`AppState`] holds the marketplace listing plus all transient UI state
//! (filter, selection, input mode). It is the single source of truth the host
//! pane mutates in response to events; every render re-derives row views from
//! the current entries.
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::app::AppState;
//! use marketplace_pane::ui::theme::Theme;
//! use marketplace_pane::ListingEntry;
//!
//! let entries = vec![ListingEntry::new("zoom", "Zoom", "Video calls", "1.4.0")];
//! let state = AppState::new(entries, Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.display_items.len(), 1);
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::domain::error::{MarketplaceError, Result};
use crate::domain::{InstallState, ListingEntry};
use crate::ui::components::{CHROME_ROWS, ROW_HEIGHT, SEARCH_BAR_ROWS};
use crate::ui::item_view::ItemView;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Listing entries, in marketplace order.
    pub entries: Vec<ListingEntry>,

    /// Indices into `entries` matching the current filter.
    ///
    /// Recomputed by `apply_search_filter()`.
    pub filtered: Vec<usize>,

    /// Zero-based index of the selected row within `filtered`.
    ///
    /// Clamped by `apply_search_filter()`, wraps during navigation.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Filter query. Whitespace-separated tokens must all match.
    pub search_query: String,

    pub theme: Theme,

    /// Set when the listing could not be loaded.
    pub load_error: Option<String>,
}

impl AppState {
    /// Creates state for the given entries with no filter applied.
    #[must_use]
    pub fn new(entries: Vec<ListingEntry>, theme: Theme) -> Self {
        let mut state = Self {
            entries: vec![],
            filtered: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            theme,
            load_error: None,
        };
        state.set_entries(entries);
        state
    }

    /// Replaces the listing, clears any load error, and re-applies the filter.
    pub fn set_entries(&mut self, entries: Vec<ListingEntry>) {
        self.entries = entries;
        self.load_error = None;
        self.apply_search_filter();
    }

    /// Moves the selection down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered.len();
    }

    /// Moves the selection up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the selected entry, if any row is visible.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&ListingEntry> {
        self.filtered
            .get(self.selected_index)
            .and_then(|&idx| self.entries.get(idx))
    }

    /// Number of entries passing the current filter.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    /// Recomputes `filtered` from the query and clamps the selection.
    ///
    /// Each query token is fuzzy-matched against the lower-cased
    /// `"<name> <description>"` of an entry; all tokens must match.
    pub fn apply_search_filter(&mut self) {
        use fuzzy_matcher::FuzzyMatcher;

        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_entries = self.entries.len(),
            query_len = self.search_query.len()
        )
        .entered();

        let tokens: Vec<String> = self
            .search_query
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        let matcher = SkimMatcherV2::default();
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                if tokens.is_empty() {
                    return true;
                }
                let haystack = format!("{} {}", entry.name, entry.description).to_lowercase();
                tokens.iter().all(|token| matcher.fuzzy_match(&haystack, token).is_some())
            })
            .map(|(idx, _)| idx)
            .collect();

        if self.filtered.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered.len() - 1);
        }

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }

    /// Flags an install as in flight and clears the previous error.
    ///
    /// Unknown ids are ignored.
    pub fn mark_installing(&mut self, id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            tracing::debug!(plugin_id = %id, "install started");
            entry.installing = true;
            entry.error = None;
        }
    }

    /// Records the outcome of an install.
    ///
    /// On success the entry becomes installed at its listed version. On failure
    /// the entry keeps its install state and shows `error`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Listing`] if no entry has the given id.
    pub fn finish_install(&mut self, id: &str, error: Option<String>) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| MarketplaceError::Listing(format!("install finished for unknown plugin '{id}'")))?;

        entry.installing = false;
        match error {
            None => {
                tracing::info!(plugin_id = %id, version = %entry.version, "plugin installed");
                entry.installed = InstallState::Installed(entry.version.clone());
                entry.error = None;
            }
            Some(message) => {
                tracing::warn!(plugin_id = %id, error = %message, "plugin install failed");
                entry.error = Some(message);
            }
        }
        Ok(())
    }

    /// Computes a renderable view model for the given terminal size.
    ///
    /// The visible window is centered on the selection and shifted back when
    /// near the end so it stays full.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let header = self.compute_header();
        let footer = self.compute_footer();
        let search_bar = self.compute_search_bar();

        if let Some(empty) = self.compute_empty_state() {
            return UIViewModel {
                display_items: vec![],
                header,
                footer,
                empty_state: Some(empty),
                search_bar,
            };
        }

        let capacity = self.row_capacity(rows);
        let total = self.filtered.len();

        let mut visible_start = self.selected_index.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(total);
        if visible_end - visible_start < capacity && total >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        let display_items = (visible_start..visible_end)
            .map(|pos| DisplayItem {
                view: ItemView::from_entry(&self.entries[self.filtered[pos]]),
                is_selected: pos == self.selected_index,
            })
            .collect();

        UIViewModel {
            display_items,
            header,
            footer,
            empty_state: None,
            search_bar,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Plugin Marketplace ({}) ", self.filtered.len()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => "ESC: exit filter  Enter: results  Type to filter",
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit filter  /: edit query  j/k: navigate  Enter: install/configure  u: update"
            }
            InputMode::Normal => "j/k: navigate  /: filter  Enter: install/configure  u: update  q: close",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        matches!(self.input_mode, InputMode::Search(_)).then(|| SearchBarInfo {
            query: self.search_query.clone(),
        })
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if let Some(error) = &self.load_error {
            return Some(EmptyState {
                message: "Marketplace unavailable".to_string(),
                subtitle: error.clone(),
            });
        }
        if self.entries.is_empty() {
            return Some(EmptyState {
                message: "No plugins found".to_string(),
                subtitle: "The marketplace listing is empty".to_string(),
            });
        }
        if self.filtered.is_empty() {
            return Some(EmptyState {
                message: "No matching plugins".to_string(),
                subtitle: format!("Nothing matches '{}'", self.search_query),
            });
        }
        None
    }

    /// Rows that fit between the chrome, at least one.
    fn row_capacity(&self, total_rows: usize) -> usize {
        let search = match self.input_mode {
            InputMode::Normal => 0,
            InputMode::Search(_) => SEARCH_BAR_ROWS,
        };
        (total_rows.saturating_sub(CHROME_ROWS + search) / ROW_HEIGHT).max(1)
    }
}
