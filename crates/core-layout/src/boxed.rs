//! Bordered box layout.
//!
//! ```text
//! ┌─────────┐
//! │ hello w │
//! │ orld    │
//! └─────────┘
//! ```
//!
//! Geometry: `width` counts both border glyphs. Each interior line is one
//! border, one space of padding, the content, fill spaces, and the closing
//! border, so content wraps at `width - 4` columns. Padding is computed from
//! measured width, never byte length, so every row lines up regardless of
//! wide characters.
//!
//! Invariants:
//! * Borders and interior lines all measure exactly `width` columns.
//! * There is always at least one interior line.
//!
//! Explicit widths below [`MIN_BOX_WIDTH`] are raised to it. Five columns is
//! the narrowest box whose one-column content area can still hold a wide
//! unit (the line may overshoot the wrap target by one column and eat the
//! trailing pad space) without the row outgrowing the border.
//!
//! Hard line breaks (`\n`) in the input start a new interior line; an empty
//! hard line renders as a blank row.

use core_text::{Measurer, wrap_with};

/// Columns taken by the two borders and the two padding spaces.
pub const BOX_CHROME: usize = 4;

/// Smallest explicit width; narrower requests are raised to this.
pub const MIN_BOX_WIDTH: usize = BOX_CHROME + 1;

const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: &str = "─";
const VERTICAL: char = '│';

/// Lay out `text` inside a box `width` columns wide.
///
/// A `width` of 0 sizes the box to its content: the widest hard line plus
/// [`BOX_CHROME`]. For single-line text this is `width(text) + 4`; for
/// multi-line text it deliberately departs from measuring the whole string
/// (which would count every line plus the `\n` units) so the box hugs its
/// longest row. Widths 1 to 4 are raised to [`MIN_BOX_WIDTH`].
pub fn boxed(text: &str, width: usize) -> Vec<String> {
    boxed_with(&Measurer::unicode(), text, width)
}

pub fn boxed_with(measurer: &Measurer, text: &str, width: usize) -> Vec<String> {
    let auto = width == 0;
    let width = if auto {
        hard_lines(text)
            .map(|line| measurer.width(line))
            .max()
            .unwrap_or(0)
            + BOX_CHROME
    } else {
        width.max(MIN_BOX_WIDTH)
    };
    let inner = width - 2;
    let wrap_target = width - BOX_CHROME;

    let rule = HORIZONTAL.repeat(inner);
    let mut out = Vec::new();
    out.push(format!("{TOP_LEFT}{rule}{TOP_RIGHT}"));
    for hard in hard_lines(text) {
        let wrapped = wrap_with(measurer, hard, wrap_target);
        if wrapped.is_empty() {
            out.push(interior(measurer, "", inner));
        }
        for line in &wrapped {
            out.push(interior(measurer, line, inner));
        }
    }
    out.push(format!("{BOTTOM_LEFT}{rule}{BOTTOM_RIGHT}"));

    tracing::trace!(
        target: "layout.box",
        width,
        auto,
        interior_lines = out.len() - 2,
        "box_layout"
    );
    out
}

fn hard_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn interior(measurer: &Measurer, line: &str, inner: usize) -> String {
    let pad = inner.saturating_sub(measurer.width(line));
    let fill = " ".repeat(pad.saturating_sub(1));
    format!("{VERTICAL} {line}{fill}{VERTICAL}")
}
