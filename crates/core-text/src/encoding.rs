//! Input normalization applied before measurement.
//!
//! Bytes arriving from files or stdin are decoded, stripped of a leading
//! byte-order mark, and composed to NFC so that canonically equivalent
//! inputs measure identically.
//!
//! Detection order: strict UTF-8, then Shift_JIS (the Windows-31J/CP932
//! superset), EUC-JP and ISO-2022-JP, taking the first encoding that decodes
//! without error. Seven-bit input carrying ISO-2022-JP designator escapes is
//! valid UTF-8 but is decoded as ISO-2022-JP. Input no candidate accepts is
//! decoded as lossy UTF-8 (bad sequences become U+FFFD).

use encoding_rs::{EUC_JP, Encoding, ISO_2022_JP, SHIFT_JIS};
use std::borrow::Cow;
use unicode_normalization::{IsNormalized, UnicodeNormalization, is_nfc_quick};

const BOM: char = '\u{FEFF}';
const ESC: u8 = 0x1B;

fn legacy_candidates() -> [&'static Encoding; 3] {
    [SHIFT_JIS, EUC_JP, ISO_2022_JP]
}

/// Compose `text` to NFC, borrowing when it is already normalized.
pub fn normalize(text: &str) -> Cow<'_, str> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    match is_nfc_quick(text.chars()) {
        IsNormalized::Yes => Cow::Borrowed(text),
        _ => Cow::Owned(text.nfc().collect()),
    }
}

/// Decode raw bytes into normalized text.
pub fn decode(bytes: &[u8]) -> String {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) if has_iso_2022_jp_escapes(bytes) => {
            decode_strict(ISO_2022_JP, bytes).unwrap_or(Cow::Borrowed(text))
        }
        Ok(text) => Cow::Borrowed(text),
        Err(err) => match legacy_candidates()
            .into_iter()
            .find_map(|encoding| decode_strict(encoding, bytes))
        {
            Some(text) => text,
            None => {
                tracing::debug!(
                    target: "text.encoding",
                    size_bytes = bytes.len(),
                    valid_up_to = err.valid_up_to(),
                    "lossy_utf8_decode"
                );
                String::from_utf8_lossy(bytes)
            }
        },
    };
    normalize(&text).into_owned()
}

fn decode_strict<'a>(encoding: &'static Encoding, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
    let text = encoding.decode_without_bom_handling_and_without_replacement(bytes)?;
    tracing::debug!(
        target: "text.encoding",
        encoding = encoding.name(),
        size_bytes = bytes.len(),
        "legacy_decode"
    );
    Some(text)
}

// `ESC $ @` or `ESC $ B`: switch to JIS X 0208.
fn has_iso_2022_jp_escapes(bytes: &[u8]) -> bool {
    bytes.is_ascii()
        && bytes
            .windows(3)
            .any(|w| w[0] == ESC && w[1] == b'$' && matches!(w[2], b'@' | b'B'))
}
