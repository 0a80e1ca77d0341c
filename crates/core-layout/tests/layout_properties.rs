//! Property-based tests for box, table and centering geometry.

use core_layout::{boxed, center, column_widths, table};
use core_text::width;
use proptest::prelude::*;

proptest! {
    // Every box line measures exactly the requested width.
    #[test]
    fn box_lines_have_exact_width(text in "[a-z あ-ん漢字]{0,50}", w in 5usize..40) {
        for line in boxed(&text, w) {
            prop_assert_eq!(width(&line), w, "line {:?}", line);
        }
    }

    // Auto-sized boxes are content width + 4 and stay rectangular.
    #[test]
    fn auto_box_is_rectangular(text in "[a-zあ-ん]{0,30}") {
        let expected = width(&text) + 4;
        let lines = boxed(&text, 0);
        prop_assert!(lines.len() >= 3);
        for line in &lines {
            prop_assert_eq!(width(line), expected);
        }
    }

    // Centering fills exactly to the target and leans right on odd padding.
    #[test]
    fn center_fills_target(text in "[a-zあ-ん]{1,10}", w in 0usize..30) {
        let out = center(&text, w);
        let tw = width(&text);
        if tw >= w {
            prop_assert_eq!(out, text);
        } else {
            prop_assert_eq!(width(&out), w);
            let left = out.len() - out.trim_start_matches(' ').len();
            let right = out.len() - out.trim_end_matches(' ').len();
            prop_assert!(right == left || right == left + 1);
            prop_assert_eq!((w - tw) % 2 == 1, right == left + 1);
        }
    }

    // All cells of a column occupy the same width, so separators line up.
    #[test]
    fn table_separators_align(
        rows in prop::collection::vec(prop::collection::vec("[a-zあ-ん]{1,6}", 3), 1..6)
    ) {
        let widths = column_widths(&rows);
        for line in table(&rows, true) {
            let parts: Vec<&str> = line.split('|').collect();
            prop_assert_eq!(parts.len(), 3);
            prop_assert_eq!(width(parts[0]), widths[0] + 2);
            prop_assert_eq!(width(parts[1]), widths[1] + 2);
        }
    }
}
