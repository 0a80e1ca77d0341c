//! Column-aligned table layout.
//!
//! Two passes over the grid:
//! 1. Column widths: for every index present in any row, the maximum
//!    measured width of the stringified cell. Rows that end early contribute
//!    nothing to the missing indices.
//! 2. Rendering: each cell becomes `" " + value + fill + " |"`; trailing
//!    spaces and separator bars are then trimmed so a row never ends in a
//!    dangling separator. Jagged rows simply stop early.
//!
//! With a header, a dashed separator row spanning every column follows the
//! first row.

use core_text::Measurer;
use std::fmt::Display;

const SEPARATOR: &str = " |";
const HEADER_RULE: &str = "-";

/// Render `rows` as aligned lines.
pub fn table<C: Display>(rows: &[Vec<C>], has_header: bool) -> Vec<String> {
    table_with(&Measurer::unicode(), rows, has_header)
}

pub fn table_with<C: Display>(
    measurer: &Measurer,
    rows: &[Vec<C>],
    has_header: bool,
) -> Vec<String> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
    let widths = widths_of(measurer, &cells);

    let mut out = Vec::with_capacity(cells.len() + usize::from(has_header));
    for (index, row) in cells.iter().enumerate() {
        let mut line = String::new();
        for (value, &col_width) in row.iter().zip(&widths) {
            let fill = col_width.saturating_sub(measurer.width(value));
            line.push(' ');
            line.push_str(value);
            line.push_str(&" ".repeat(fill));
            line.push_str(SEPARATOR);
        }
        out.push(trim_separator(line));

        if has_header && index == 0 {
            let mut rule = String::new();
            for &col_width in &widths {
                rule.push(' ');
                rule.push_str(&HEADER_RULE.repeat(col_width));
                rule.push_str(SEPARATOR);
            }
            out.push(trim_separator(rule));
        }
    }

    tracing::trace!(
        target: "layout.table",
        rows = cells.len(),
        columns = widths.len(),
        has_header,
        "table_layout"
    );
    out
}

/// Per-column display widths of `rows`.
pub fn column_widths<C: Display>(rows: &[Vec<C>]) -> Vec<usize> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();
    widths_of(&Measurer::unicode(), &cells)
}

fn widths_of(measurer: &Measurer, rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            let w = measurer.width(value);
            match widths.get_mut(i) {
                Some(current) => *current = (*current).max(w),
                None => widths.push(w),
            }
        }
    }
    widths
}

fn trim_separator(mut line: String) -> String {
    let keep = line.trim_end_matches([' ', '|']).len();
    line.truncate(keep);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn computes_max_width_per_column() {
        let rows = vec![vec!["a", "bb"], vec!["ccc", "d"]];
        assert_eq!(column_widths(&rows), vec![3, 2]);
    }

    #[test]
    fn pads_cells_and_trims_trailing_separator() {
        let rows = vec![vec!["a", "bb"], vec!["ccc", "d"]];
        assert_eq!(table(&rows, false), vec![" a   | bb", " ccc | d"]);
    }

    #[test]
    fn header_separator_after_first_row() {
        let rows = vec![vec!["name", "qty"], vec!["apple", "3"]];
        assert_eq!(
            table(&rows, true),
            vec![" name  | qty", " ----- | ---", " apple | 3"]
        );
    }

    #[test]
    fn wide_cells_align() {
        let rows = vec![vec!["名前", "x"], vec!["ab", "y"]];
        assert_eq!(table(&rows, false), vec![" 名前 | x", " ab   | y"]);
    }

    #[test]
    fn jagged_rows_end_early() {
        let rows = vec![vec!["a", "b", "c"], vec!["dd"]];
        assert_eq!(column_widths(&rows), vec![2, 1, 1]);
        assert_eq!(table(&rows, true), vec![" a  | b | c", " -- | - | -", " dd"]);
    }

    #[test]
    fn numeric_cells_are_stringified() {
        let rows = vec![vec![1, 200], vec![30, 4]];
        assert_eq!(table(&rows, false), vec![" 1  | 200", " 30 | 4"]);
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert!(table(&rows, true).is_empty());
        assert!(column_widths(&rows).is_empty());
    }
}
