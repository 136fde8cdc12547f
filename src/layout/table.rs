//! Property/value table rendering.

use super::columns::{ColumnWidths, compute_columns};
use super::request::{LayoutRequest, PairKind, classify};
use crate::error::{LayoutError, ValidationError};
use crate::text_measure::{measure, widest_line, wrap_words};
use crate::types::{Align, WidthMetric};

/// Render a property/value table at `line_width`.
///
/// Every produced line is exactly `line_width` wide. Nothing is returned on
/// error, so callers never print half a table.
pub fn render_property_table(
    request: &LayoutRequest,
    line_width: usize,
) -> Result<Vec<String>, LayoutError> {
    request.validate()?;
    if line_width == 0 {
        return Err(ValidationError::ZeroWidth.into());
    }

    let metric = request.metric;
    let content: Vec<(usize, usize)> = request
        .pairs
        .iter()
        .filter(|(property, _)| classify(property) == PairKind::Row)
        .map(|(property, value)| (widest_line(property, metric), widest_line(value, metric)))
        .collect();

    let columns = compute_columns(
        &content,
        request.body_align,
        request.content_align,
        request.padding,
        line_width,
    )?;

    let mut lines = Vec::new();
    for (property, value) in &request.pairs {
        match classify(property) {
            PairKind::Skip => {}
            PairKind::Blank => lines.push(" ".repeat(line_width)),
            PairKind::Row => render_pair(property, value, &columns, request, &mut lines),
        }
    }
    Ok(lines)
}

fn render_pair(
    property: &str,
    value: &str,
    columns: &ColumnWidths,
    request: &LayoutRequest,
    lines: &mut Vec<String>,
) {
    let metric = request.metric;
    let prop_lines = wrap_words(property, columns.property, metric);
    let value_lines = wrap_words(value, columns.value, metric);
    let rows = prop_lines.len().max(value_lines.len());

    let pad = " ".repeat(request.padding);
    let buffer_left = " ".repeat(columns.buffer_left);
    let buffer_right = " ".repeat(columns.buffer_right);

    for i in 0..rows {
        let prop = prop_lines.get(i).map(String::as_str).unwrap_or("");
        let val = value_lines.get(i).map(String::as_str).unwrap_or("");

        let mut line = String::with_capacity(columns.line_width(request.padding));
        line.push_str(&buffer_left);
        line.push_str(&justify(prop, columns.property, request.content_align, metric));
        line.push_str(&pad);
        line.push(request.separator);
        line.push_str(&pad);
        line.push_str(&justify(val, columns.value, request.content_align, metric));
        line.push_str(&buffer_right);
        lines.push(line);
    }
}

/// Pad `text` to `width` according to `align`. Odd leftover goes right.
pub fn justify(text: &str, width: usize, align: Align, metric: WidthMetric) -> String {
    let slack = width.saturating_sub(measure(text, metric));
    let (left, right) = match align {
        Align::Left => (0, slack),
        Align::Right => (slack, 0),
        Align::Center => (slack / 2, slack - slack / 2),
    };

    let mut out = String::with_capacity(text.len() + slack);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', right));
    out
}
