//! Marketplace Pane: a Zellij plugin for browsing and installing plugins.
//!
//! The pane shows a plugin marketplace listing, one row per plugin, with:
//! - Icon, name, version, and description (or the last install error)
//! - An action control: Install, Try Again, Installing..., or Configure
//! - An update prompt when the installed version differs from the listed one
//! - Filtering by name and description

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Gesture and event handling                       │
//! │  - Action dispatching to host collaborators         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ UI Layer (ui/)           │   │ Domain Layer (domain/)   │
//! │ - Row view + element tree│   │ - Listing entries        │
//! │ - Terminal painting      │   │ - Error types            │
//! │ - Theming                │   │                          │
//! └──────────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (sandbox paths), Observability      │
//! │  (OpenTelemetry spans exported to an OTLP JSON file)│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/marketplace-pane.wasm" {
//!         listing_file "~/.config/zellij/marketplace.json"
//!         install_command "zellij-plugin-install"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::app::{dispatch, handle_gesture, MarketplaceActions, Telemetry};
//! use marketplace_pane::ui::{render_item, Gesture, ItemView};
//! use marketplace_pane::ListingEntry;
//!
//! #[derive(Default)]
//! struct Host { installs: Vec<String>, events: Vec<String> }
//!
//! impl MarketplaceActions for Host {
//!     fn install_plugin(&mut self, id: &str) { self.installs.push(id.into()); }
//!     fn close_marketplace_modal(&mut self) {}
//! }
//! impl Telemetry for Host {
//!     fn track_event(&mut self, _category: &str, event: &str) { self.events.push(event.into()); }
//! }
//!
//! let mut entry = ListingEntry::new("zoom", "Zoom", "Video calls", "1.4.0");
//! entry.download_url = Some("https://example.com/zoom.tar.gz".into());
//!
//! let row = render_item(&ItemView::from_entry(&entry));
//! let button = row.find(&|e: &marketplace_pane::ui::Element| e.has_class("btn-primary")).unwrap();
//! let gesture: Gesture = button.click().unwrap();
//!
//! let mut host = Host::default();
//! let mut telemetry = Host::default();
//! dispatch(&handle_gesture(&entry, gesture), &mut host, &mut telemetry);
//! assert_eq!(host.installs, vec!["zoom"]);
//! assert_eq!(telemetry.events, vec!["ui_marketplace_download"]);
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, handle_gesture, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{InstallState, ListingEntry, MarketplaceError, Result};
pub use ui::{ActionState, ItemView, Theme};

use std::collections::BTreeMap;

/// Default listing location when `listing_file` is not configured.
pub const DEFAULT_LISTING_FILE: &str = "~/.config/zellij/marketplace.json";

/// Plugin configuration parsed from Zellij's plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/marketplace-pane.wasm" {
///     listing_file "~/.config/zellij/marketplace.json"
///     install_command "zellij-plugin-install --quiet"
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON listing to display. `~` maps to the sandbox host root.
    pub listing_file: String,

    /// Command that installs a plugin; the plugin id is appended as the last
    /// argument. Empty when not configured.
    pub install_command: Vec<String>,

    /// Built-in theme name (`catppuccin-mocha`, `catppuccin-latte`).
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listing_file: DEFAULT_LISTING_FILE.to_string(),
            install_command: vec![],
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use marketplace_pane::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("install_command".to_string(), "plugin-tool install".to_string());
    /// map.insert("theme".to_string(), " ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.install_command, vec!["plugin-tool", "install"]);
    /// assert_eq!(config.theme_name, None);
    /// assert_eq!(config.listing_file, "~/.config/zellij/marketplace.json");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            listing_file: value("listing_file").unwrap_or_else(|| DEFAULT_LISTING_FILE.to_string()),
            install_command: value("install_command")
                .map(|cmd| cmd.split_whitespace().map(String::from).collect())
                .unwrap_or_default(),
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Command line that installs `plugin_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketplaceError::Config`] when no `install_command` is set.
    pub fn install_argv(&self, plugin_id: &str) -> Result<Vec<String>> {
        if self.install_command.is_empty() {
            return Err(MarketplaceError::Config(
                "install_command is not configured".to_string(),
            ));
        }

        let mut argv = self.install_command.clone();
        argv.push(plugin_id.to_string());
        Ok(argv)
    }
}

/// Interprets the exit status of an install command.
///
/// # Errors
///
/// Returns [`MarketplaceError::Install`] carrying the trimmed stderr, or the
/// exit code when stderr is empty.
pub fn install_outcome(exit_code: Option<i32>, stderr: &[u8]) -> Result<()> {
    if exit_code == Some(0) {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(stderr);
    let message = stderr.trim();
    if message.is_empty() {
        let code = exit_code.map_or_else(|| "signal".to_string(), |c| c.to_string());
        Err(MarketplaceError::Install(format!("install command exited with {code}")))
    } else {
        Err(MarketplaceError::Install(message.to_string()))
    }
}

/// Creates the initial application state.
///
/// Loads the theme from `theme_file`, then `theme_name`, falling back to the
/// default theme. The listing starts empty until the host loads it.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing marketplace pane");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(vec![], theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_argv_appends_plugin_id() {
        let config = Config {
            install_command: vec!["tool".into(), "install".into()],
            ..Config::default()
        };
        assert_eq!(config.install_argv("zoom").unwrap(), vec!["tool", "install", "zoom"]);
    }

    #[test]
    fn install_argv_requires_command() {
        let err = Config::default().install_argv("zoom").unwrap_err();
        assert!(matches!(err, MarketplaceError::Config(_)));
    }

    #[test]
    fn install_outcome_prefers_stderr() {
        assert!(install_outcome(Some(0), b"ignored").is_ok());

        let err = install_outcome(Some(1), b"  network failure\n").unwrap_err();
        assert_eq!(err.to_string(), "Install error: network failure");

        let err = install_outcome(None, b"").unwrap_err();
        assert_eq!(err.to_string(), "Install error: install command exited with signal");
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".into()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.colors.border, Theme::default().colors.border);
        assert!(state.entries.is_empty());
    }
}
