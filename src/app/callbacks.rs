//! Collaborator interfaces invoked by marketplace rows.
//!
//! A row never installs, navigates, or records analytics itself. It hands user
//! intent to two collaborators supplied by the host:
//!
//! - [`MarketplaceActions`]: installs plugins, closes the marketplace, routes
//! - [`Telemetry`]: records fire-and-forget analytics events
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::app::callbacks::{MarketplaceActions, Telemetry, TelemetryEvent};
//!
//! #[derive(Default)]
//! struct Recorder {
//!     installs: Vec<String>,
//! }
//!
//! impl MarketplaceActions for Recorder {
//!     fn install_plugin(&mut self, id: &str) {
//!         self.installs.push(id.to_string());
//!     }
//!     fn close_marketplace_modal(&mut self) {}
//! }
//!
//! let mut recorder = Recorder::default();
//! recorder.install_plugin("zoom");
//! assert_eq!(recorder.installs, vec!["zoom"]);
//! assert_eq!(TelemetryEvent::Download.name(), "ui_marketplace_download");
//! ```

/// Host operations a row can request.
pub trait MarketplaceActions {
    /// Starts installing (or updating) the plugin with the given id.
    fn install_plugin(&mut self, id: &str);

    /// Closes the marketplace.
    fn close_marketplace_modal(&mut self);

    /// Resolves an in-app navigation path such as
    /// `/admin_console/plugins/plugin_<id>`.
    fn navigate(&mut self, path: &str) {
        tracing::debug!(path = %path, "navigation requested without a router");
    }
}

/// Analytics sink.
pub trait Telemetry {
    /// Records an event. Return values and failures are not observed.
    fn track_event(&mut self, category: &str, event: &str);
}

/// Category tag attached to every marketplace telemetry event.
pub const TELEMETRY_CATEGORY: &str = "plugins";

/// Telemetry events emitted by row gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TelemetryEvent {
    /// Fresh install from the Install or Try Again button.
    Download,
    /// Install triggered from the update prompt.
    DownloadUpdate,
    /// Configure button.
    Configure,
}

impl TelemetryEvent {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Download => "ui_marketplace_download",
            Self::DownloadUpdate => "ui_marketplace_download_update",
            Self::Configure => "ui_marketplace_configure",
        }
    }

    #[must_use]
    pub const fn category(self) -> &'static str {
        TELEMETRY_CATEGORY
    }
}

/// [`Telemetry`] that records events as `tracing` events.
///
/// Events are emitted at info level under the `marketplace::telemetry` target,
/// so they reach whatever subscriber the host installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn track_event(&mut self, category: &str, event: &str) {
        tracing::info!(target: "marketplace::telemetry", category = %category, event = %event, "telemetry event");
    }
}
