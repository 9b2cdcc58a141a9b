//! Footer component renderer.
//!
//! Renders the help bar with centered keybinding hints.

use crate::ui::helpers::{display_width, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders keybinding hints, dimmed and centered, at `row`.
///
/// Returns the next available row.
pub fn render_footer(canvas: &mut Canvas, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(padding);
    canvas.push(&help_text);
    canvas.pad(cols.saturating_sub(padding + text_len));
    canvas.push(Theme::reset());
    row + 1
}
