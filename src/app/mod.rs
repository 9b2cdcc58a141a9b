//! Application layer coordinating state, events, and actions.
//!
//! Sits between the Zellij shim (main.rs) and the domain/UI layers. Handlers
//! never perform side effects; they return [`Action`]s that [`dispatch`] runs
//! against host-supplied collaborators.
//!
//! ```text
//! Keys / host results → Event → handle_event → AppState mutations
//!                                    │
//! Row gesture → handle_gesture ──────┴→ Vec<Action> → dispatch → callbacks
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects and the dispatcher
//! - [`callbacks`]: Collaborator traits ([`MarketplaceActions`], [`Telemetry`])
//! - [`handler`]: Gesture and event processing
//! - [`modes`]: Input mode state machine
//! - [`state`]: Application state and view model computation
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::app::{handle_event, AppState, Event};
//! use marketplace_pane::ui::theme::Theme;
//!
//! let mut state = AppState::new(vec![], Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), marketplace_pane::MarketplaceError>(())
//! ```

pub mod actions;
pub mod callbacks;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{dispatch, Action};
pub use callbacks::{MarketplaceActions, Telemetry, TelemetryEvent, TracingTelemetry};
pub use handler::{handle_event, handle_gesture, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::AppState;
