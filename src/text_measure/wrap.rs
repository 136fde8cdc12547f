//! Greedy word wrapping for table columns and bordered strings.
//!
//! Lines break on whitespace only. A word wider than the line is force-broken
//! at grapheme boundaries. Explicit newlines are hard breaks. Lines that fit
//! are returned untouched; lines produced by wrapping lose trailing spaces.

use unicode_segmentation::UnicodeSegmentation;

use super::width::measure;
use crate::types::WidthMetric;

/// Wrap `text` so that no line is wider than `max_width` under `metric`.
///
/// Returns an empty `Vec` for empty input. A `max_width` of 0 only splits on
/// newlines.
pub fn wrap_words(text: &str, max_width: usize, metric: WidthMetric) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let mut lines = Vec::new();

    for raw_line in text.split('\n') {
        if max_width == 0 || measure(raw_line, metric) <= max_width {
            lines.push(raw_line.to_string());
            continue;
        }
        wrap_line(raw_line, max_width, metric, &mut lines);
    }

    tracing::trace!(max_width, count = lines.len(), "wrapped text");
    lines
}

fn wrap_line(line: &str, max_width: usize, metric: WidthMetric, lines: &mut Vec<String>) {
    let first = lines.len();
    let mut current = String::new();
    let mut current_width = 0;

    for segment in split_on_whitespace(line) {
        let seg_width = measure(segment, metric);

        if current_width + seg_width > max_width {
            if current_width > 0 {
                // Leading whitespace alone never makes a line.
                let flushed = current.trim_end();
                if !flushed.is_empty() {
                    lines.push(flushed.to_string());
                }
                current.clear();
                current_width = 0;
            }

            // Whitespace at a break point is dropped.
            if is_whitespace(segment) {
                continue;
            }

            if seg_width > max_width {
                force_break(segment, max_width, metric, lines, &mut current, &mut current_width);
                continue;
            }
        }

        current.push_str(segment);
        current_width += seg_width;
    }

    if !current.is_empty() || lines.len() == first {
        lines.push(current.trim_end().to_string());
    }
}

/// Break a word wider than `max_width` at grapheme boundaries.
fn force_break(
    word: &str,
    max_width: usize,
    metric: WidthMetric,
    lines: &mut Vec<String>,
    current: &mut String,
    current_width: &mut usize,
) {
    for grapheme in word.graphemes(true) {
        let gw = measure(grapheme, metric);

        if *current_width + gw > max_width && !current.is_empty() {
            lines.push(std::mem::take(current));
            *current_width = 0;
        }

        current.push_str(grapheme);
        *current_width += gw;
    }
}

/// Split a line into alternating runs of whitespace and non-whitespace.
fn split_on_whitespace(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_space = None;

    for (i, c) in line.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                segments.push(&line[start..i]);
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }

    if start < line.len() {
        segments.push(&line[start..]);
    }
    segments
}

fn is_whitespace(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}
