//! ANSI escape sequence stripping.
//!
//! Handles CSI (`ESC [` ... final byte 0x40–0x7E), string-terminated
//! sequences (OSC/DCS/PM/APC ending in BEL or `ESC \`), and two-character
//! `ESC x` sequences. ESC is a single ASCII byte, so slicing at ESC
//! positions never splits a UTF-8 sequence.

use std::borrow::Cow;

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Remove escape sequences from `s`, borrowing when none are present.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&ESC) {
        return Cow::Borrowed(s);
    }
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == ESC {
            i = skip_escape(bytes, i);
            continue;
        }
        let start = i;
        while i < bytes.len() && bytes[i] != ESC {
            i += 1;
        }
        out.push_str(&s[start..i]);
    }
    Cow::Owned(out)
}

fn skip_escape(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    match bytes.get(next) {
        None => bytes.len(),
        Some(b'[') => skip_csi(bytes, next + 1),
        Some(b']' | b'P' | b'^' | b'_') => skip_string_terminated(bytes, next + 1),
        Some(_) => next + 1,
    }
}

fn skip_csi(bytes: &[u8], mut i: usize) -> usize {
    while let Some(&b) = bytes.get(i) {
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i; // malformed; resume at the offending byte
        }
        i += 1;
    }
    bytes.len()
}

fn skip_string_terminated(bytes: &[u8], mut i: usize) -> usize {
    while let Some(&b) = bytes.get(i) {
        if b == BEL {
            return i + 1;
        }
        if b == ESC && bytes.get(i + 1) == Some(&b'\\') {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}
