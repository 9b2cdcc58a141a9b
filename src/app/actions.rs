//! Actions representing side effects to be executed by the host.
//!
//! Gesture and event handlers are pure: they return a `Vec<Action>` instead of
//! calling collaborators directly. [`dispatch`] then executes the actions in
//! order against the host's [`MarketplaceActions`] and [`Telemetry`]
//! implementations.
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::app::{dispatch, Action};
//! use marketplace_pane::app::callbacks::{MarketplaceActions, Telemetry, TelemetryEvent};
//!
//! struct Host(Vec<String>);
//!
//! impl MarketplaceActions for Host {
//!     fn install_plugin(&mut self, id: &str) { self.0.push(format!("install {id}")); }
//!     fn close_marketplace_modal(&mut self) { self.0.push("close".into()); }
//! }
//!
//! impl Telemetry for Host {
//!     fn track_event(&mut self, _category: &str, event: &str) { self.0.push(event.into()); }
//! }
//!
//! let mut host = Host(vec![]);
//! let mut telemetry = Host(vec![]);
//! dispatch(
//!     &[Action::Track(TelemetryEvent::Download), Action::InstallPlugin { id: "zoom".into() }],
//!     &mut host,
//!     &mut telemetry,
//! );
//! assert_eq!(host.0, vec!["install zoom"]);
//! assert_eq!(telemetry.0, vec!["ui_marketplace_download"]);
//! ```

use crate::app::callbacks::{MarketplaceActions, Telemetry, TelemetryEvent};

/// Side effects requested by a row or by the host pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Emits a telemetry event.
    Track(TelemetryEvent),

    /// Starts an install or update of the plugin.
    InstallPlugin {
        /// Plugin identifier.
        id: String,
    },

    /// Closes the marketplace.
    CloseMarketplaceModal,

    /// Navigates to an in-app path.
    Navigate {
        /// Router path, e.g. `/admin_console/plugins/plugin_zoom`.
        path: String,
    },
}

/// Executes actions in order.
pub fn dispatch(actions: &[Action], callbacks: &mut dyn MarketplaceActions, telemetry: &mut dyn Telemetry) {
    for action in actions {
        tracing::debug!(action = ?action, "dispatching action");
        match action {
            Action::Track(event) => telemetry.track_event(event.category(), event.name()),
            Action::InstallPlugin { id } => callbacks.install_plugin(id),
            Action::CloseMarketplaceModal => callbacks.close_marketplace_modal(),
            Action::Navigate { path } => callbacks.navigate(path),
        }
    }
}
