//! Search bar component renderer.
//!
//! Renders the filter input box with a bordered frame and query text.

use crate::ui::helpers::{display_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the three-line search box starting at `row`.
///
/// ```text
///      ┌──────────────────────┐
///      │ Filter: zoo          │
///      └──────────────────────┘
/// ```
///
/// Returns the row after the box.
pub fn render_search_bar(canvas: &mut Canvas, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    canvas.position_cursor(row, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&border);
    canvas.push(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    let search_text = truncate(&format!(" Filter: {}", search.query), inner_width);
    let padding = inner_width.saturating_sub(display_width(&search_text));

    canvas.position_cursor(row + 1, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&border);
    canvas.push("│");
    canvas.push(&Theme::fg(&theme.colors.text_normal));
    canvas.push(&search_text);
    canvas.pad(padding);
    canvas.push(&border);
    canvas.push("│");
    canvas.push(Theme::reset());

    canvas.position_cursor(row + 2, 1);
    canvas.pad(SEARCH_BOX_MARGIN);
    canvas.push(&border);
    canvas.push(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.push(Theme::reset());

    row + 3
}
