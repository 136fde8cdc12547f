//! ANSI escape sequence stripping.
//!
//! Colored table cells must not count their escapes toward the column width
//! when measuring in terminal cells. Handles:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC, DCS, PM and APC strings, terminated by BEL or ST (`ESC \`)
//! - Two-character sequences: `ESC` + single char

use std::borrow::Cow;

/// Strip ANSI escape sequences from a string.
///
/// Borrows when the input holds no ESC byte.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&0x1B) {
        return Cow::Borrowed(s);
    }

    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == 0x1B {
            i = escape_end(bytes, i);
            continue;
        }
        // ESC is ASCII, so cutting at it never splits a UTF-8 sequence.
        let start = i;
        while i < bytes.len() && bytes[i] != 0x1B {
            i += 1;
        }
        out.push_str(&s[start..i]);
    }

    Cow::Owned(out)
}

/// Byte index just past the escape sequence starting at `pos`.
fn escape_end(bytes: &[u8], pos: usize) -> usize {
    match bytes.get(pos + 1) {
        None => bytes.len(),
        Some(b'[') => csi_end(bytes, pos + 2),
        Some(b']' | b'P' | b'^' | b'_') => string_end(bytes, pos + 2),
        Some(_) => pos + 2,
    }
}

fn csi_end(bytes: &[u8], from: usize) -> usize {
    for (i, &b) in bytes.iter().enumerate().skip(from) {
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
    }
    bytes.len()
}

fn string_end(bytes: &[u8], from: usize) -> usize {
    let mut i = from;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            0x1B if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}
