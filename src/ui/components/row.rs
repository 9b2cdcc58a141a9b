//! Terminal painter for marketplace rows.
//!
//! Each row occupies [`ROW_HEIGHT`] terminal lines:
//!
//! ```text
//! ▌◇ Zoom (1.3.0)                                      [ Configure ]
//!     Video calls
//!     Update available: 1.4.0 - Update (u)
//! ```
//!
//! The first column marks the selected row, the second holds the icon glyph
//! (`▣` for an icon image, `◇` for the placeholder). The action button is
//! right-aligned and dimmed when disabled. Errors replace the description and
//! use the theme's error color.

use crate::ui::helpers::{display_width, single_line, truncate, Canvas};
use crate::ui::item_view::{Icon, ItemView};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

/// Terminal lines used by one row.
pub const ROW_HEIGHT: usize = 3;

const INDENT: usize = 4;

/// Renders all rows starting at `row` and returns the next free row.
pub fn render_rows(canvas: &mut Canvas, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current, item| render_row(canvas, current, item, theme, cols))
}

fn apply_base(canvas: &mut Canvas, item: &DisplayItem, theme: &Theme) {
    if item.is_selected {
        canvas.push(&Theme::fg(&theme.colors.selection_fg));
        canvas.push(&Theme::bg(&theme.colors.selection_bg));
    } else {
        canvas.push(&Theme::fg(&theme.colors.text_normal));
    }
}

fn render_row(canvas: &mut Canvas, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    render_title_line(canvas, row, item, theme, cols);
    render_description_line(canvas, row + 1, item, theme, cols);
    render_update_line(canvas, row + 2, item, theme, cols);
    row + ROW_HEIGHT
}

fn render_title_line(canvas: &mut Canvas, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) {
    let view = &item.view;
    let button = format!("[ {} ]", view.action.label());
    let button_len = display_width(&button);
    let version_len = display_width(&view.version_label);

    // marker + icon + space, then name, space, version, gap before the button
    let fixed = 3 + 1 + version_len + 1 + button_len;
    let name = truncate(&single_line(&view.name), cols.saturating_sub(fixed));

    canvas.position_cursor(row, 1);
    apply_base(canvas, item, theme);
    canvas.push(if item.is_selected { "▌" } else { " " });

    canvas.push(&Theme::fg(&theme.colors.icon_fg));
    canvas.push(match view.icon {
        Icon::Image(_) => "▣",
        Icon::Placeholder => "◇",
    });
    apply_base(canvas, item, theme);
    canvas.push(" ");

    canvas.push(Theme::bold());
    if view.homepage_url.is_some() {
        canvas.push(Theme::underline());
        canvas.push(&Theme::fg(&theme.colors.link_fg));
    }
    canvas.push(&name);
    canvas.push(Theme::reset());
    apply_base(canvas, item, theme);

    canvas.push(" ");
    canvas.push(&Theme::fg(&theme.colors.text_dim));
    canvas.push(&view.version_label);
    apply_base(canvas, item, theme);

    let used = 3 + display_width(&name) + 1 + version_len;
    canvas.pad(cols.saturating_sub(used + button_len));

    render_button(canvas, view, &button, theme);
    canvas.push(Theme::reset());
}

fn render_button(canvas: &mut Canvas, view: &ItemView, button: &str, theme: &Theme) {
    if view.action.is_enabled() {
        canvas.push(Theme::bold());
        canvas.push(&Theme::fg(&theme.colors.button_fg));
        canvas.push(&Theme::bg(&theme.colors.button_bg));
    } else {
        canvas.push(Theme::dim());
        canvas.push(&Theme::fg(&theme.colors.button_disabled_fg));
    }
    canvas.push(button);
}

fn render_description_line(canvas: &mut Canvas, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) {
    let description = &item.view.description;
    let text = truncate(&single_line(description.text()), cols.saturating_sub(INDENT));

    canvas.position_cursor(row, 1);
    apply_base(canvas, item, theme);
    canvas.pad(INDENT);
    if description.is_error() {
        canvas.push(&Theme::fg(&theme.colors.error_fg));
    } else {
        canvas.push(&Theme::fg(&theme.colors.text_dim));
    }
    canvas.push(&text);
    canvas.pad(cols.saturating_sub(INDENT + display_width(&text)));
    canvas.push(Theme::reset());
}

fn render_update_line(canvas: &mut Canvas, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) {
    canvas.position_cursor(row, 1);
    apply_base(canvas, item, theme);

    let Some(update) = &item.view.update else {
        canvas.pad(cols);
        canvas.push(Theme::reset());
        return;
    };

    let prefix = "Update available: ";
    let suffix = " - Update (u)";
    let line_len = INDENT + display_width(prefix) + display_width(&update.available_version) + display_width(suffix);

    canvas.pad(INDENT);
    canvas.push(&Theme::fg(&theme.colors.update_fg));
    canvas.push(prefix);
    if update.release_notes_url.is_some() {
        canvas.push(Theme::underline());
        canvas.push(&Theme::fg(&theme.colors.link_fg));
        canvas.push(&update.available_version);
        canvas.push(Theme::reset());
        apply_base(canvas, item, theme);
        canvas.push(&Theme::fg(&theme.colors.update_fg));
    } else {
        canvas.push(&update.available_version);
    }
    canvas.push(suffix);
    canvas.pad(cols.saturating_sub(line_len));
    canvas.push(Theme::reset());
}
