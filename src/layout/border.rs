//! Bordered strings: `---  text  ---` spanning the whole line.

use crate::error::LayoutError;
use crate::text_measure::{measure, wrap_words};
use crate::types::WidthMetric;

/// Render `text` centered between two runs of `border`.
///
/// - Each line of a multi-line `text` is rendered on its own.
/// - Empty text renders a border-only line and ignores `padding`.
/// - Text too long for the line is word-wrapped, one bordered line per
///   wrapped line.
/// - When the border runs cannot be equal the right one is longer.
///
/// The border character counts as one column.
pub fn render_bordered_string(
    text: &str,
    border: char,
    padding: usize,
    width: usize,
    metric: WidthMetric,
) -> Result<Vec<String>, LayoutError> {
    if text.contains('\n') {
        let mut lines = Vec::new();
        for line in text.split('\n') {
            lines.extend(render_bordered_string(line, border, padding, width, metric)?);
        }
        return Ok(lines);
    }

    let (padding, content) = if text.is_empty() { (0, 0) } else { (padding, 1) };
    let required = 2 + 2 * padding + content;
    if width < required {
        return Err(LayoutError::InsufficientWidth { required });
    }

    let available = width - 2 * padding - 2;
    if measure(text, metric) <= available {
        return Ok(vec![bordered(text, border, padding, width, metric)?]);
    }

    wrap_words(text, available, metric)
        .iter()
        .map(|line| bordered(line, border, padding, width, metric))
        .collect()
}

fn bordered(
    text: &str,
    border: char,
    padding: usize,
    width: usize,
    metric: WidthMetric,
) -> Result<String, LayoutError> {
    let len = measure(text, metric);
    let inner = len + 2 * padding;
    // A single grapheme wider than the whole line cannot be wrapped further.
    if inner + 2 > width && !text.is_empty() {
        return Err(LayoutError::InsufficientWidth { required: inner + 2 });
    }

    let side = width.saturating_sub(inner) / 2;
    let extra = (len + width) % 2;

    let mut line = String::with_capacity(width + text.len());
    line.extend(std::iter::repeat_n(border, side));
    line.extend(std::iter::repeat_n(' ', padding));
    line.push_str(text);
    line.extend(std::iter::repeat_n(' ', padding));
    line.extend(std::iter::repeat_n(border, side + extra));
    Ok(line)
}
