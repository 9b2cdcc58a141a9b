//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`item`]: Element tree of one marketplace row
//! - `row`: Terminal painting of marketplace rows
//! - `header`: Title bar
//! - `footer`: Keybinding hints
//! - `search`: Filter input box
//! - `empty`: Empty state message
//!
//! # Layout
//!
//! [`render_layout`] paints the whole pane:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Rows - 3 lines each | Empty state]
//! [Border]
//! [Footer]
//! ```

pub mod item;
mod row;
mod header;
mod footer;
mod search;
mod empty;

pub use item::render_item;
pub use row::ROW_HEIGHT;

use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use row::render_rows;
use search::render_search_bar;

/// Lines used by the pane chrome outside the search bar: blank line, header,
/// two borders, footer.
pub const CHROME_ROWS: usize = 5;

/// Lines used by the search bar.
pub const SEARCH_BAR_ROWS: usize = 3;

/// Renders a horizontal border line at `row`; returns `row + 1`.
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize) -> usize {
    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(color));
    canvas.push(&"─".repeat(cols));
    canvas.push(Theme::reset());
    row + 1
}

/// Paints the full pane for a view model.
pub fn render_layout(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    current_row = render_border(canvas, current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(canvas, current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(canvas, current_row + 2, empty, theme, cols);
    } else {
        render_rows(canvas, current_row, &vm.display_items, theme, cols);
    }

    let footer_start = rows.max(CHROME_ROWS);
    let border_row = footer_start.saturating_sub(1);

    render_border(canvas, border_row, &theme.colors.border, cols);
    render_footer(canvas, footer_start, &vm.footer, theme, cols);
}
