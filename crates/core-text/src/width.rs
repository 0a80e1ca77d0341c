//! Display width engine.
//!
//! All layout decisions (wrapping, box padding, table columns, centering)
//! flow through this module. The display unit is the extended grapheme
//! cluster (EGC); each cluster is classified and mapped to either one or two
//! terminal columns following the East Asian Width property, with explicit
//! emoji presentation sequences treated as wide.
//!
//! Width Precedence Order:
//! 1. Emoji presentation sequences (keycap, regional indicator pair, ZWJ
//!    joining two pictographs, skin tone modifier, VS16) -> 2.
//! 2. Base + combining marks -> East Asian Width of the base.
//! 3. Anything else, including every single code point -> East Asian Width
//!    (`unicode-width`): Wide/Fullwidth -> 2, Neutral/Ambiguous/Narrow -> 1.
//!
//! Text-default symbols such as `✓`, `★` or `❤` are Neutral and measure one
//! column unless followed by VS16.
//!
//! Invariants:
//! - `width("") == 0`.
//! - Width of a concatenation split on cluster boundaries is the sum of the
//!   parts (additivity); appending units never decreases width.
//! - No caller bypasses `Measurer` for layout math, so wrapping, padding and
//!   centering always agree on what a column is.
//!
//! `WidthMode::Bytes` is the explicit degradation path: each unit counts its
//! UTF-8 byte length. It exists for environments where the terminal does not
//! honor East Asian widths and for inputs that never decoded cleanly.

use unicode_segmentation::UnicodeSegmentation;

/// How a [`Measurer`] assigns columns to a display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidthMode {
    /// East Asian Width classification of grapheme clusters (narrow=1, wide=2).
    #[default]
    Unicode,
    /// Raw UTF-8 byte count.
    Bytes,
}

impl WidthMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WidthMode::Unicode => "unicode",
            WidthMode::Bytes => "bytes",
        }
    }
}

/// Semantic classification of a single grapheme cluster (EGC).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EgcKind {
    Ascii,
    Narrow,
    Wide,
    EmojiPresented,  // Pictographic + VS16
    EmojiModifier,   // Emoji + skin tone modifier
    EmojiKeycap,     // Keycap sequence (base + optional VS16 + \u{20E3})
    EmojiFlag,       // Regional indicator pair
    EmojiZwj,        // ZWJ sequence combining >=2 pictographic bases
    Combining(bool), // Base + combining mark(s); bool indicates a wide base (true => width 2)
}

const ZWJ: char = '\u{200D}';
const VS16: char = '\u{FE0F}';
const KEYCAP_COMBINING: char = '\u{20E3}';

fn is_regional_indicator(c: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)
}

// Fitzpatrick skin tone modifiers
fn is_skin_tone_modifier(c: char) -> bool {
    ('\u{1F3FB}'..='\u{1F3FF}').contains(&c)
}

// Rough Extended Pictographic heuristic (emoji blocks + misc symbols used as
// emoji). Only counted inside sequences; it never widens a code point alone.
fn is_extended_pictographic(c: char) -> bool {
    ('\u{1F300}'..='\u{1FAFF}').contains(&c) || ('\u{2600}'..='\u{27BF}').contains(&c)
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
        || ('\u{1AB0}'..='\u{1AFF}').contains(&c)
        || ('\u{1DC0}'..='\u{1DFF}').contains(&c)
        || ('\u{20D0}'..='\u{20FF}').contains(&c)
        || ('\u{FE20}'..='\u{FE2F}').contains(&c)
        || ('\u{3099}'..='\u{309A}').contains(&c) // kana voiced sound marks
}

#[inline]
fn is_east_asian_wide(c: char) -> bool {
    unicode_width::UnicodeWidthChar::width(c) == Some(2)
}

/// Classify an EGC (single grapheme slice). Returns `None` for empty input.
fn classify(egc: &str) -> Option<EgcKind> {
    let mut chars = egc.chars();
    let first = chars.next()?;

    if chars.next().is_none() {
        if first.is_ascii() {
            return Some(EgcKind::Ascii);
        }
        if is_east_asian_wide(first) {
            return Some(EgcKind::Wide);
        }
        // Ambiguous East Asian width resolves to narrow.
        return Some(EgcKind::Narrow);
    }

    let total = egc.chars().count();
    let mut count_ep = 0usize;
    let mut count_ri = 0usize;
    let mut has_zwj = false;
    let mut has_skin = false;
    let mut has_vs16 = false;
    let mut has_combining = false;
    let mut keycap_base = false;
    let mut ends_with_keycap = false;
    let mut any_wide = false;
    let mut base_wide = false;
    let mut saw_base = false;

    for (i, c) in egc.chars().enumerate() {
        if is_extended_pictographic(c) {
            count_ep += 1;
        }
        if is_regional_indicator(c) {
            count_ri += 1;
        }
        if c == ZWJ {
            has_zwj = true;
        }
        if is_skin_tone_modifier(c) {
            has_skin = true;
        }
        if c == VS16 {
            has_vs16 = true;
        }
        let mark = is_combining_mark(c);
        if mark {
            has_combining = true;
        }
        if c == KEYCAP_COMBINING && i == total - 1 {
            ends_with_keycap = true;
        }
        if c.is_ascii_digit() || c == '#' || c == '*' {
            keycap_base = true;
        }
        let wide = is_east_asian_wide(c);
        any_wide |= wide;
        if !saw_base && !mark {
            saw_base = true;
            base_wide = wide;
        }
    }

    let kind = if ends_with_keycap && keycap_base {
        EgcKind::EmojiKeycap
    } else if count_ri == 2 && total == 2 {
        EgcKind::EmojiFlag
    } else if has_zwj && count_ep >= 2 {
        EgcKind::EmojiZwj
    } else if count_ep >= 1 && has_skin {
        EgcKind::EmojiModifier
    } else if count_ep >= 1 && has_vs16 {
        EgcKind::EmojiPresented
    } else if has_combining {
        EgcKind::Combining(base_wide)
    } else if any_wide {
        EgcKind::Wide
    } else {
        EgcKind::Narrow
    };
    Some(kind)
}

#[inline]
fn width_for_kind(kind: EgcKind) -> u16 {
    match kind {
        EgcKind::Ascii | EgcKind::Narrow => 1,
        EgcKind::Wide
        | EgcKind::EmojiPresented
        | EgcKind::EmojiModifier
        | EgcKind::EmojiKeycap
        | EgcKind::EmojiFlag
        | EgcKind::EmojiZwj => 2,
        EgcKind::Combining(base_wide) => {
            if base_wide {
                2
            } else {
                1
            }
        }
    }
}

/// Return the display column width for a single grapheme cluster (EGC).
///
/// Precondition: `egc` is a single grapheme cluster slice (callers segment
/// first). Empty input returns 0.
#[inline]
pub fn egc_width(egc: &str) -> u16 {
    classify(egc).map_or(0, width_for_kind)
}

/// Width calculator bound to a [`WidthMode`].
///
/// Cheap to copy; carries no state beyond the mode so it can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measurer {
    mode: WidthMode,
}

impl Measurer {
    pub const fn new(mode: WidthMode) -> Self {
        Self { mode }
    }

    pub const fn unicode() -> Self {
        Self::new(WidthMode::Unicode)
    }

    pub const fn bytes() -> Self {
        Self::new(WidthMode::Bytes)
    }

    pub fn mode(&self) -> WidthMode {
        self.mode
    }

    /// Width of one display unit (grapheme cluster).
    #[inline]
    pub fn unit_width(&self, unit: &str) -> usize {
        match self.mode {
            WidthMode::Unicode => egc_width(unit) as usize,
            WidthMode::Bytes => unit.len(),
        }
    }

    /// Display width of an arbitrary string.
    pub fn width(&self, text: &str) -> usize {
        match self.mode {
            WidthMode::Bytes => text.len(),
            WidthMode::Unicode => {
                // CRLF is a single cluster, so only take the byte shortcut without '\r'.
                if text.is_ascii() && !text.contains('\r') {
                    return text.len();
                }
                text.graphemes(true).map(|g| egc_width(g) as usize).sum()
            }
        }
    }
}

/// Display width of `text` using the Unicode measurer.
#[inline]
pub fn width(text: &str) -> usize {
    Measurer::unicode().width(text)
}

/// Display width of raw bytes. Valid UTF-8 is measured normally; malformed
/// input degrades to its byte count instead of failing.
pub fn width_bytes(bytes: &[u8]) -> usize {
    match std::str::from_utf8(bytes) {
        Ok(text) => width(text),
        Err(err) => {
            tracing::debug!(
                target: "text.width",
                size_bytes = bytes.len(),
                valid_up_to = err.valid_up_to(),
                "malformed_utf8_byte_count_fallback"
            );
            bytes.len()
        }
    }
}
