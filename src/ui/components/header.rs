//! Header component renderer.
//!
//! Renders the pane title bar with centered text, theme-aware colors, and
//! optional background styling.

use crate::ui::helpers::{display_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row` and returns the next free row.
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = display_width(&title);
    let padding = (cols.saturating_sub(title_len)) / 2;

    canvas.position_cursor(row, 1);
    canvas.push(Theme::bold());
    canvas.push(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.push(&Theme::bg(bg));
    }

    canvas.pad(padding);
    canvas.push(&title);
    canvas.pad(cols.saturating_sub(padding + title_len));

    canvas.push(Theme::reset());
    row + 1
}
