//! Section headings built from bordered strings.

use super::border::render_bordered_string;
use crate::error::LayoutError;
use crate::types::{BorderLines, HeadingSpec, WidthMetric};

/// Render `text` as a heading in the given style.
///
/// Layout, top to bottom: `padding_top` empty lines, an optional border-only
/// line, the bordered text (marker prefixed), an optional border-only line,
/// `padding_bottom` empty lines.
pub fn render_heading(
    spec: &HeadingSpec,
    text: &str,
    width: usize,
    metric: WidthMetric,
) -> Result<Vec<String>, LayoutError> {
    let title = match spec.marker {
        Some(marker) => format!("{marker}{text}"),
        None => text.to_string(),
    };

    let body = render_bordered_string(&title, spec.border, spec.padding, width, metric)?;
    let rule = || render_bordered_string("", spec.border, 0, width, metric);

    let mut lines = Vec::with_capacity(body.len() + spec.padding_top + spec.padding_bottom + 2);
    lines.extend(std::iter::repeat_n(String::new(), spec.padding_top));
    if spec.border_lines.contains(BorderLines::TOP) {
        lines.extend(rule()?);
    }
    lines.extend(body);
    if spec.border_lines.contains(BorderLines::BOTTOM) {
        lines.extend(rule()?);
    }
    lines.extend(std::iter::repeat_n(String::new(), spec.padding_bottom));
    Ok(lines)
}

/// Resolve a style token and render the heading.
pub fn render_heading_style(
    style: &str,
    text: &str,
    width: usize,
    metric: WidthMetric,
) -> Result<Vec<String>, LayoutError> {
    render_heading(&HeadingSpec::parse(style)?, text, width, metric)
}
