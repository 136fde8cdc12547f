//! Width calculation for layout.
//!
//! Two metrics are supported. `Bytes` counts UTF-8 bytes, which is what the
//! shell functions measured with `${#var}`. `Cells` measures terminal cells:
//! East Asian Width for characters, grapheme clusters for emoji sequences,
//! ANSI escapes stripped.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use super::ansi::strip_ansi;
use crate::types::WidthMetric;

/// Display width of a single codepoint in terminal cells.
#[inline]
pub fn char_width(c: char) -> usize {
    match c as u32 {
        // Misc symbols and dingbats (✔, ⚠, ✨) render wide in most terminals.
        0x2600..=0x27BF => 2,
        0x1F300..=0x1F64F => 2,
        0x1F680..=0x1F6FF => 2,
        0x1F900..=0x1F9FF => 2,
        0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Display width of a grapheme cluster in terminal cells.
///
/// - `e` + combining acute → 1
/// - ZWJ sequences, VS16 presentation, skin tones, keycaps → 2
/// - regional indicator pairs (flags) → 2
pub fn grapheme_width(grapheme: &str) -> usize {
    let mut chars = grapheme.chars();
    let Some(first) = chars.next() else {
        return 0;
    };

    if grapheme.len() == first.len_utf8() {
        return char_width(first);
    }

    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    let emoji_sequence = chars.any(|c| {
        matches!(c as u32, 0x200D | 0xFE0F | 0x1F3FB..=0x1F3FF | 0x20E3)
    });
    if emoji_sequence {
        return 2;
    }

    first.width().unwrap_or(0)
}

/// Display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // Pure ASCII without escapes: printable bytes are one cell each.
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|&b| b >= 0x20 && b != 0x7F).count();
    }

    strip_ansi(s).graphemes(true).map(grapheme_width).sum()
}

/// Length of `s` under `metric`.
#[inline]
pub fn measure(s: &str, metric: WidthMetric) -> usize {
    match metric {
        WidthMetric::Bytes => s.len(),
        WidthMetric::Cells => string_width(s),
    }
}

/// Length of the longest `\n`-separated line of `s`.
pub fn widest_line(s: &str, metric: WidthMetric) -> usize {
    s.split('\n').map(|line| measure(line, metric)).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_width_basics() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width(' '), 1);
        assert_eq!(char_width('\t'), 0);
        assert_eq!(char_width('\u{0301}'), 0);
        assert_eq!(char_width('好'), 2);
        assert_eq!(char_width('⚠'), 2);
    }

    #[test]
    fn grapheme_sequences() {
        assert_eq!(grapheme_width("e\u{0301}"), 1);
        assert_eq!(grapheme_width("👨\u{200D}👩\u{200D}👧"), 2);
        assert_eq!(grapheme_width("🇩🇪"), 2);
        assert_eq!(grapheme_width("1\u{FE0F}\u{20E3}"), 2);
        assert_eq!(grapheme_width(""), 0);
    }

    #[test]
    fn string_width_cells() {
        assert_eq!(string_width("eth0"), 4);
        assert_eq!(string_width("a\tb"), 2);
        assert_eq!(string_width("网络"), 4);
        assert_eq!(string_width("\x1b[32mUP\x1b[0m"), 2);
    }

    #[test]
    fn bytes_metric_counts_utf8_bytes() {
        assert_eq!(measure("eth0", WidthMetric::Bytes), 4);
        assert_eq!(measure("größe", WidthMetric::Bytes), 7);
        assert_eq!(measure("größe", WidthMetric::Cells), 5);
        assert_eq!(measure("\x1b[1mx\x1b[0m", WidthMetric::Bytes), 9);
    }

    #[test]
    fn widest_line_checks_each_line() {
        assert_eq!(widest_line("ab\nabcdef\nabc", WidthMetric::Bytes), 6);
        assert_eq!(widest_line("", WidthMetric::Bytes), 0);
    }
}
