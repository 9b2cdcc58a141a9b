//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the marketplace library and Zellij: maps
//! Zellij events to library events, runs install commands, and renders.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Key, `RunCommandResult`, `PermissionRequestResult`
//! 3. **Permissions granted**: Read the listing file
//! 4. **Update**: Handle events, dispatch actions to [`ZellijHost`]
//! 5. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key(Down)`/`j` → `Event::KeyDown` (types `j` while filtering)
//! - `Key(Enter)` → `Event::Activate` (focuses results while typing a filter)
//! - `u` → `Event::Update`
//! - `RunCommandResult` with a `plugin_id` context → `Event::InstallFinished`
//!
//! # Keybindings
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `Enter`: Install, retry, or configure the selected plugin
//! - `u`: Update the selected plugin
//! - `/`: Filter
//! - `q`/`Esc`: Close the marketplace
//!
//! In filter mode:
//! - Characters edit the query, `Backspace` deletes
//! - `Enter`: Move focus to results
//! - `/`: Return focus to the query
//! - `Esc`: Clear the filter

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use marketplace_pane::app::{dispatch, MarketplaceActions, SearchFocus, TracingTelemetry};
use marketplace_pane::domain::load_listing;
use marketplace_pane::infrastructure::expand_tilde;
use marketplace_pane::{handle_event, install_outcome, AppState, Config, Event, InputMode, MarketplaceError};

register_plugin!(State);

/// Run-command context key carrying the plugin being installed.
const PLUGIN_ID_CONTEXT: &str = "plugin_id";

/// Plugin state wrapper.
struct State {
    app: AppState,
    host: ZellijHost,
    telemetry: TracingTelemetry,
}

impl Default for State {
    fn default() -> Self {
        let host = ZellijHost::default();
        Self {
            app: marketplace_pane::initialize(&host.config),
            host,
            telemetry: TracingTelemetry,
        }
    }
}

/// [`MarketplaceActions`] backed by the Zellij API.
///
/// Installs that cannot start are reported back as `InstallFinished` events
/// queued in `pending`.
#[derive(Debug, Default)]
struct ZellijHost {
    config: Config,
    pending: Vec<Event>,
}

impl MarketplaceActions for ZellijHost {
    fn install_plugin(&mut self, id: &str) {
        match self.config.install_argv(id) {
            Ok(argv) => {
                tracing::info!(plugin_id = %id, command = ?argv, "running install command");
                let args: Vec<&str> = argv.iter().map(String::as_str).collect();
                let context = BTreeMap::from([(PLUGIN_ID_CONTEXT.to_string(), id.to_string())]);
                run_command(&args, context);
            }
            Err(e) => {
                tracing::warn!(plugin_id = %id, error = %e, "cannot start install");
                self.pending.push(Event::InstallFinished {
                    id: id.to_string(),
                    error: Some(e.to_string()),
                });
            }
        }
    }

    fn close_marketplace_modal(&mut self) {
        tracing::debug!("closing marketplace");
        hide_self();
    }

    fn navigate(&mut self, path: &str) {
        tracing::info!(path = %path, "open the admin console at this path to configure the plugin");
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        marketplace_pane::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        tracing::debug!(listing_file = %config.listing_file, "parsed configuration");

        self.app = marketplace_pane::initialize(&config);
        self.host.config = config;

        request_permission(&[
            PermissionType::FullHdAccess,
            PermissionType::RunCommands,
            PermissionType::ChangeApplicationState,
        ]);
        subscribe(&[
            EventType::Key,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::event_name(&event);
        let _guard = tracing::debug_span!("plugin_update", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                match Self::map_command_result(exit_code, &stderr, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => self.map_permission_result(status),
            _ => return false,
        };

        let mut should_render = self.process(&our_event);
        while !self.host.pending.is_empty() {
            let queued = std::mem::take(&mut self.host.pending);
            for event in &queued {
                should_render |= self.process(event);
            }
        }
        should_render
    }

    fn render(&mut self, rows: usize, cols: usize) {
        marketplace_pane::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn process(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                dispatch(&actions, &mut self.host, &mut self.telemetry);
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        let mode = self.app.input_mode;
        let typing = mode == InputMode::Search(SearchFocus::Typing);

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if !typing => Event::KeyDown,
            BareKey::Char('k') if !typing => Event::KeyUp,
            BareKey::Enter if typing => Event::FocusResults,
            BareKey::Enter => Event::Activate,
            BareKey::Char('u') if !typing => Event::Update,
            BareKey::Char('/') => match mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Esc => match mode {
                InputMode::Normal => Event::CloseFocus,
                InputMode::Search(_) => Event::ExitSearch,
            },
            BareKey::Char('q') if mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) if typing => Event::Char(c),
            _ => return None,
        })
    }

    fn map_command_result(exit_code: Option<i32>, stderr: &[u8], context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(id) = context.get(PLUGIN_ID_CONTEXT) else {
            tracing::debug!("ignoring command result without plugin context");
            return None;
        };

        let error = install_outcome(exit_code, stderr).err().map(|e| {
            tracing::warn!(plugin_id = %id, error = %e, "install command failed");
            match e {
                MarketplaceError::Install(message) => message,
                other => other.to_string(),
            }
        });

        Some(Event::InstallFinished { id: id.clone(), error })
    }

    fn map_permission_result(&self, status: PermissionStatus) -> Event {
        match status {
            PermissionStatus::Granted => {
                let path = expand_tilde(&self.host.config.listing_file);
                tracing::debug!(path = %path, "permissions granted - loading listing");
                match load_listing(&path) {
                    Ok(entries) => Event::ListingLoaded { entries },
                    Err(e) => Event::ListingFailed { error: e.to_string() },
                }
            }
            PermissionStatus::Denied => Event::ListingFailed {
                error: "filesystem permission denied".to_string(),
            },
        }
    }
}
