//! Single column scroll position indicator drawn to the left of the list.
//!
//! ```text
//! │  Apple        <- window at the top: glyph on the first line
//!      red
//!
//!    Banana
//!      yellow
//! ```
//!
//! The glyph sits on line `floor(start / (len - window) * (lines - 1))` of the
//! rendered body. When every item fits in the window there is nothing to
//! scroll and the column stays blank.

use crossterm::style::{Color, Stylize};
use unicode_width::UnicodeWidthStr;

pub const DEFAULT_GLYPH: &str = "\u{2502}"; // '│', BOX DRAWINGS LIGHT VERTICAL

/// Glyph and colour of the scrollbar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarStyle {
    pub glyph: String,
    pub color: Option<Color>,
}

impl Default for ScrollbarStyle {
    fn default() -> Self {
        Self {
            glyph: DEFAULT_GLYPH.to_string(),
            color: Some(Color::Rgb {
                r: 0x77,
                g: 0x77,
                b: 0x77,
            }),
        }
    }
}

impl ScrollbarStyle {
    pub fn render(&self) -> String {
        match self.color {
            Some(color) => self.glyph.as_str().with(color).to_string(),
            None => self.glyph.clone(),
        }
    }
}

/// Line of the rendered body that carries the scrollbar glyph.
///
/// Returns `None` when `len` fits into `window`.
pub fn scrollbar_row(
    start: usize,
    len: usize,
    window: usize,
    rendered_lines: usize,
) -> Option<usize> {
    if len <= window {
        return None;
    }

    let scrollable = (len - window) as f64;
    let fraction = (start as f64 / scrollable).min(1.0);
    let last_line = rendered_lines.saturating_sub(1) as f64;

    Some((fraction * last_line).floor() as usize)
}

/// Prefixes every line of `body` with the glyph or a blank column.
pub fn overlay(body: &str, row: Option<usize>, style: &ScrollbarStyle) -> String {
    let glyph = style.render();
    let blank = " ".repeat(style.glyph.width().max(1));

    let mut out = String::with_capacity(body.len() + glyph.len());
    for (lineno, line) in body.split('\n').enumerate() {
        if lineno > 0 {
            out.push('\n');
        }
        if row == Some(lineno) {
            out.push_str(&glyph);
        } else {
            out.push_str(&blank);
        }
        out.push_str(line);
    }

    out
}
