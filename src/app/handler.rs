//! Event handling and state transition logic.
//!
//! Two handlers live here:
//!
//! - [`handle_gesture`] turns a gesture on one row into the actions that row
//!   requests. It is a pure function of the entry and never mutates it.
//! - [`handle_event`] processes host events (keys, listing loads, install
//!   results), mutates [`AppState`], and returns whether to re-render plus
//!   the actions to execute.
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::app::{handle_gesture, Action};
//! use marketplace_pane::app::callbacks::TelemetryEvent;
//! use marketplace_pane::ui::Gesture;
//! use marketplace_pane::ListingEntry;
//!
//! let mut entry = ListingEntry::new("zoom", "Zoom", "Video calls", "1.4.0");
//! entry.download_url = Some("https://example.com/zoom.tar.gz".into());
//!
//! let actions = handle_gesture(&entry, Gesture::Install);
//! assert_eq!(actions, vec![
//!     Action::Track(TelemetryEvent::Download),
//!     Action::InstallPlugin { id: "zoom".into() },
//! ]);
//! ```

use crate::app::callbacks::TelemetryEvent;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::ListingEntry;
use crate::ui::item_view::{Gesture, ItemView};

/// Actions requested by a gesture on a row.
///
/// Gestures on controls the row does not currently show, or shows disabled,
/// yield no actions.
#[must_use]
pub fn handle_gesture(entry: &ListingEntry, gesture: Gesture) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_gesture", plugin_id = %entry.id, gesture = ?gesture).entered();

    let view = ItemView::from_entry(entry);
    if !view.accepts(gesture) {
        tracing::debug!(action_state = ?view.action, "gesture ignored, control not active");
        return vec![];
    }

    match gesture {
        Gesture::Install => vec![
            Action::Track(TelemetryEvent::Download),
            Action::InstallPlugin { id: entry.id.clone() },
        ],
        Gesture::Update => vec![
            Action::Track(TelemetryEvent::DownloadUpdate),
            Action::InstallPlugin { id: entry.id.clone() },
        ],
        Gesture::Configure => vec![
            Action::Track(TelemetryEvent::Configure),
            Action::CloseMarketplaceModal,
            Action::Navigate { path: entry.admin_path() },
        ],
    }
}

/// Host events from user input and install results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the selection down (wraps to top).
    KeyDown,
    /// Moves the selection up (wraps to bottom).
    KeyUp,
    /// Closes the pane.
    CloseFocus,
    /// Presses the primary control of the selected row.
    Activate,
    /// Presses the update prompt of the selected row.
    Update,
    /// Enters filter mode with typing focus.
    SearchMode,
    /// Focuses the filter input (from result navigation).
    FocusSearchBar,
    /// Focuses the filtered results (from typing).
    FocusResults,
    /// Leaves filter mode and clears the query.
    ExitSearch,
    /// Appends a character to the filter query.
    Char(char),
    /// Removes the last character from the filter query.
    Backspace,
    /// A marketplace listing was loaded.
    ListingLoaded {
        entries: Vec<ListingEntry>,
    },
    /// The marketplace listing could not be loaded.
    ListingFailed {
        error: String,
    },
    /// An install or update finished.
    InstallFinished {
        /// Plugin identifier.
        id: String,
        /// Failure message, `None` on success.
        error: Option<String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Returns [`MarketplaceError::Listing`](crate::MarketplaceError::Listing) when
/// an install result names a plugin that is not in the listing.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    use super::modes::{InputMode, SearchFocus};

    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseMarketplaceModal])),
        Event::Activate | Event::Update => {
            let Some(entry) = state.selected_entry() else {
                tracing::debug!("no plugin selected");
                return Ok((false, vec![]));
            };

            let gesture = if *event == Event::Update {
                Gesture::Update
            } else {
                ItemView::from_entry(entry).action.gesture()
            };

            let actions = handle_gesture(entry, gesture);
            let installing: Vec<String> = actions
                .iter()
                .filter_map(|action| match action {
                    Action::InstallPlugin { id } => Some(id.clone()),
                    _ => None,
                })
                .collect();

            for id in &installing {
                state.mark_installing(id);
            }

            Ok((!installing.is_empty(), actions))
        }
        Event::SearchMode => {
            tracing::debug!("entering filter mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.search_query.is_empty() {
                state.input_mode = InputMode::Normal;
                state.apply_search_filter();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.search_query, "exiting filter mode");
            state.input_mode = InputMode::Normal;
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(query = %state.search_query, "filter query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::ListingLoaded { entries } => {
            tracing::debug!(entry_count = entries.len(), "listing loaded");
            state.set_entries(entries.clone());
            Ok((true, vec![]))
        }
        Event::ListingFailed { error } => {
            tracing::warn!(error = %error, "listing failed to load");
            state.load_error = Some(error.clone());
            Ok((true, vec![]))
        }
        Event::InstallFinished { id, error } => {
            state.finish_install(id, error.clone())?;
            Ok((true, vec![]))
        }
    }
}
