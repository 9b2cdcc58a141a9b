//! Derived view of a single marketplace row.
//!
//! [`ItemView::from_entry`] evaluates every display decision of a row once:
//! icon, version label, description or error, homepage wrapper, update prompt,
//! and the [`ActionState`] of the primary control. Renderers (the element tree
//! builder and the terminal painter) only match on the result.
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::ListingEntry;
//! use marketplace_pane::ui::item_view::{ActionState, ItemView};
//!
//! let entry = ListingEntry::new("zoom", "Zoom", "Video calls", "1.4.0");
//! let view = ItemView::from_entry(&entry);
//! assert_eq!(view.action, ActionState::Install { enabled: false });
//! assert_eq!(view.version_label, "(1.4.0)");
//! ```

use crate::domain::ListingEntry;

/// User intent on a row control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// Primary Install or Try Again button.
    Install,
    /// "Update" link of the update prompt.
    Update,
    /// Configure button.
    Configure,
}

/// State of the primary action control.
///
/// Exactly one state applies to any entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionState {
    /// Installed and idle: link to the admin page.
    Configure {
        /// Router path of the plugin's admin page.
        path: String,
    },
    /// Not installed, no error.
    Install {
        /// False when the entry has no download URL.
        enabled: bool,
    },
    /// The last install attempt failed.
    TryAgain {
        /// False when the entry has no download URL.
        enabled: bool,
    },
    /// An install or update is in flight; the control is disabled.
    Installing,
}

impl ActionState {
    /// Derives the control state of an entry.
    #[must_use]
    pub fn for_entry(entry: &ListingEntry) -> Self {
        if entry.installed.is_installed() && !entry.installing && entry.error.is_none() {
            return Self::Configure {
                path: entry.admin_path(),
            };
        }

        if entry.installing {
            return Self::Installing;
        }

        let enabled = entry.has_download();
        if entry.error.is_some() {
            Self::TryAgain { enabled }
        } else {
            Self::Install { enabled }
        }
    }

    /// Button text. `Installing` shows the loading text instead of a label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Configure { .. } => "Configure",
            Self::Install { .. } => "Install",
            Self::TryAgain { .. } => "Try Again",
            Self::Installing => INSTALLING_TEXT,
        }
    }

    /// Whether clicking the control does anything.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        match self {
            Self::Configure { .. } => true,
            Self::Install { enabled } | Self::TryAgain { enabled } => *enabled,
            Self::Installing => false,
        }
    }

    /// The gesture the control emits when clicked.
    #[must_use]
    pub const fn gesture(&self) -> Gesture {
        match self {
            Self::Configure { .. } => Gesture::Configure,
            Self::Install { .. } | Self::TryAgain { .. } | Self::Installing => Gesture::Install,
        }
    }
}

/// Loading text shown on the action button while installing.
pub const INSTALLING_TEXT: &str = "Installing...";

/// Row icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// Image with the given source.
    Image(String),
    /// Generic plugin glyph.
    Placeholder,
}

/// Text shown under the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    Text(String),
    Error(String),
}

impl Description {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Error(text) => text,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Inline prompt offering a newer (or different) version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePrompt {
    /// Version offered by the marketplace.
    pub available_version: String,
    /// Link target for the version text, when release notes exist.
    pub release_notes_url: Option<String>,
}

/// Fully derived display state of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub row_id: String,
    pub name: String,
    pub version_label: String,
    pub description: Description,
    pub icon: Icon,
    /// Outbound homepage link wrapping name and description.
    pub homepage_url: Option<String>,
    pub accessible_label: String,
    pub update: Option<UpdatePrompt>,
    pub action: ActionState,
}

impl ItemView {
    /// Derives the row view of an entry. Pure; the entry is not modified.
    #[must_use]
    pub fn from_entry(entry: &ListingEntry) -> Self {
        let version_label = format!(
            "({})",
            entry.installed.version().unwrap_or(entry.version.as_str())
        );

        let description = entry.error.as_ref().map_or_else(
            || Description::Text(entry.description.clone()),
            |error| Description::Error(error.clone()),
        );

        let icon = entry
            .icon_data
            .as_ref()
            .map_or(Icon::Placeholder, |data| Icon::Image(data.clone()));

        let update = entry.pending_update().map(|available| UpdatePrompt {
            available_version: available.to_string(),
            release_notes_url: entry.release_notes_url.clone(),
        });

        Self {
            id: entry.id.clone(),
            row_id: entry.row_id(),
            name: entry.name.clone(),
            version_label,
            description,
            icon,
            homepage_url: entry.homepage_url.clone(),
            accessible_label: entry.accessible_label(),
            update,
            action: ActionState::for_entry(entry),
        }
    }

    /// Whether a gesture currently targets a live control of this row.
    ///
    /// Gestures on hidden or disabled controls are ignored.
    #[must_use]
    pub fn accepts(&self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::Update => self.update.is_some(),
            Gesture::Install | Gesture::Configure => {
                self.action.is_enabled() && self.action.gesture() == gesture
            }
        }
    }
}
