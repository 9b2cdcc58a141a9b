//! Empty state component renderer.
//!
//! Renders the message shown when the listing is empty, failed to load, or
//! the filter matches nothing.

use crate::ui::helpers::{display_width, single_line, truncate, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting at `row`.
///
/// ```text
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Returns the row after the subtitle.
pub fn render_empty_state(canvas: &mut Canvas, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = display_width(&empty.message);
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    canvas.position_cursor(row, 1);
    canvas.push(&Theme::fg(&theme.colors.empty_state_fg));
    canvas.pad(msg_padding);
    canvas.push(&empty.message);
    canvas.pad(cols.saturating_sub(msg_padding + msg_len));
    canvas.push(Theme::reset());

    let subtitle = truncate(&single_line(&empty.subtitle), cols);
    let sub_len = display_width(&subtitle);
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    canvas.position_cursor(row + 1, 1);
    canvas.push(Theme::dim());
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(sub_padding);
    canvas.push(&subtitle);
    canvas.pad(cols.saturating_sub(sub_padding + sub_len));
    canvas.push(Theme::reset());

    row + 2
}
