//! Character-break wrapping.
//!
//! Units are appended to the current line one at a time; as soon as the
//! line's width reaches the target (`>=`), it is emitted and a new line is
//! started. There is no word-boundary awareness and no look-ahead, so a line
//! may overshoot the target by at most one unit's width minus one when a wide
//! unit lands on the last column. Units are never split.
//!
//! Newlines are ordinary units here; callers that want hard breaks split the
//! input first (see the box layout).

use crate::width::Measurer;
use unicode_segmentation::UnicodeSegmentation;

/// Wrap `text` at `target` columns using the Unicode measurer.
///
/// Returns an empty `Vec` for empty input. A `target` of 0 is treated as 1.
pub fn wrap(text: &str, target: usize) -> Vec<String> {
    wrap_with(&Measurer::unicode(), text, target)
}

/// Wrap `text` at `target` columns using `measurer` for unit widths.
pub fn wrap_with(measurer: &Measurer, text: &str, target: usize) -> Vec<String> {
    let target = target.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0usize;

    for unit in text.graphemes(true) {
        line.push_str(unit);
        line_width += measurer.unit_width(unit);
        if line_width >= target {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::width;

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(wrap("", 5).is_empty());
    }

    #[test]
    fn breaks_mid_word() {
        assert_eq!(wrap("hello world", 4), vec!["hell", "o wo", "rld"]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_line() {
        assert_eq!(wrap("abcdef", 3), vec!["abc", "def"]);
    }

    #[test]
    fn wide_units_break_at_target() {
        assert_eq!(wrap("あいうえ", 4), vec!["あい", "うえ"]);
    }

    #[test]
    fn wide_unit_may_overshoot_by_one() {
        // "aあ" reaches 3 columns against a target of 2.
        let lines = wrap("aあb", 2);
        assert_eq!(lines, vec!["aあ", "b"]);
        assert_eq!(width(&lines[0]), 3);
    }

    #[test]
    fn unit_wider_than_target_is_kept_whole() {
        assert_eq!(wrap("漢字", 1), vec!["漢", "字"]);
    }

    #[test]
    fn zero_target_is_one_unit_per_line() {
        assert_eq!(wrap("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn newline_is_an_ordinary_unit() {
        assert_eq!(wrap("a\nb", 10), vec!["a\nb"]);
    }

    #[test]
    fn bytes_mode_counts_bytes() {
        let m = Measurer::bytes();
        // Each kana is 3 bytes, so every unit completes a line at target 3.
        assert_eq!(wrap_with(&m, "あい", 3), vec!["あ", "い"]);
    }
}
