//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Paint the layout into a [`Canvas`]
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::app::AppState;
//! use marketplace_pane::ui::renderer::render_to_string;
//! use marketplace_pane::Theme;
//!
//! let state = AppState::new(vec![], Theme::default());
//! let frame = render_to_string(&state, 24, 80);
//! assert!(frame.contains("Marketplace"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;

/// Renders the pane to stdout.
///
/// Does not clear the screen; every line of the pane area is overwritten.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the pane into a string of ANSI output.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut canvas = Canvas::new();
    components::render_layout(&mut canvas, &viewmodel, &state.theme, cols, rows);
    canvas.into_string()
}
