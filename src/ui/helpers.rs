//! Shared rendering utilities.
//!
//! Components write into a [`Canvas`], an in-memory buffer of ANSI output with
//! absolute cursor positioning. The renderer flushes the buffer to stdout in one
//! write; tests inspect it directly.
//!
//! # Example
//!
//! ```rust
//! use marketplace_pane::ui::helpers::Canvas;
//!
//! let mut canvas = Canvas::new();
//! canvas.position_cursor(5, 1);
//! canvas.push("Content at row 5");
//! assert_eq!(canvas.plain_text(), "Content at row 5");
//! ```

/// Buffered ANSI output.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    buffer: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the cursor to a 1-indexed row and column.
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.buffer.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Writes `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buffer.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Buffer contents with every escape sequence removed.
    ///
    /// Cursor moves become newlines so rows stay distinguishable.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let mut chars = self.buffer.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '\u{1b}' {
                out.push(c);
                continue;
            }
            if chars.peek() != Some(&'[') {
                continue;
            }
            chars.next();
            for terminator in chars.by_ref() {
                if terminator.is_ascii_alphabetic() {
                    if terminator == 'H' && !out.is_empty() {
                        out.push('\n');
                    }
                    break;
                }
            }
        }

        out
    }
}

/// Display width in terminal cells, counting one cell per character.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Collapses text onto one terminal line, joining its non-blank lines with a
/// space.
#[must_use]
pub fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncates to at most `width` characters, ending with `...` when cut.
///
/// # Example
///
/// ```rust
/// use marketplace_pane::ui::helpers::truncate;
///
/// assert_eq!(truncate("marketplace", 8), "marke...");
/// assert_eq!(truncate("short", 8), "short");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}
