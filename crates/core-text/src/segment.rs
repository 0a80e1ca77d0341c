//! Segmentation adapter: splits text into display units.
//!
//! Contract:
//! - Units are extended grapheme clusters, in order, non-overlapping, and
//!   cover the entire input when concatenated.
//! - Each `Segment` carries absolute byte offsets into the input and the
//!   width assigned by the caller's `Measurer`.
//! - Does not log content; callers should avoid logging raw text.

use crate::width::Measurer;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub cluster: &'a str,
    pub start: usize, // byte offset (inclusive)
    pub end: usize,   // byte offset (exclusive)
    pub width: usize, // terminal columns under the measurer's mode
}

/// Iterate the display units of `text`.
#[inline]
pub fn units(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.graphemes(true)
}

/// Segment `text` into units with byte ranges and widths.
pub fn segments<'a>(text: &'a str, measurer: &Measurer) -> Vec<Segment<'a>> {
    text.grapheme_indices(true)
        .map(|(start, cluster)| Segment {
            cluster,
            start,
            end: start + cluster.len(),
            width: measurer.unit_width(cluster),
        })
        .collect()
}
