//! Property/value table request.

use crate::error::ValidationError;
use crate::types::{Align, WidthMetric};

/// One property/value table render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRequest {
    /// Where the two-column block sits on the line.
    pub body_align: Align,
    /// How text is justified inside each column.
    pub content_align: Align,
    /// Spaces on each side of the separator. At least 1.
    pub padding: usize,
    /// Target line width; `None` means the terminal width.
    pub width: Option<usize>,
    pub separator: char,
    pub metric: WidthMetric,
    pub pairs: Vec<(String, String)>,
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self {
            body_align: Align::Left,
            content_align: Align::Left,
            padding: 2,
            width: None,
            separator: ':',
            metric: WidthMetric::Bytes,
            pairs: Vec::new(),
        }
    }
}

impl LayoutRequest {
    /// Empty request with the defaults: left/left, padding 2, `:` separator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where the two-column block sits on the line.
    pub fn body_align(mut self, align: Align) -> Self {
        self.body_align = align;
        self
    }

    /// Set how text is justified inside both columns.
    pub fn content_align(mut self, align: Align) -> Self {
        self.content_align = align;
        self
    }

    /// Set the spaces on each side of the separator.
    pub fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Render at a fixed width instead of the terminal width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the separator character.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set how string length is counted.
    pub fn metric(mut self, metric: WidthMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Append one property/value pair.
    ///
    /// An empty property is skipped at render time; a whitespace-only
    /// property renders as a blank row.
    pub fn pair(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.pairs.push((property.into(), value.into()));
        self
    }

    /// Append a flat `property value property value ...` token list.
    ///
    /// Nothing is appended when the count is odd.
    pub fn push_tokens<I, S>(&mut self, tokens: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if tokens.len() % 2 != 0 {
            return Err(ValidationError::OddPairCount(tokens.len()));
        }

        let mut iter = tokens.into_iter();
        while let (Some(property), Some(value)) = (iter.next(), iter.next()) {
            self.pairs.push((property, value));
        }
        Ok(())
    }

    /// Check the request-level invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.padding < 1 {
            return Err(ValidationError::Padding(self.padding));
        }
        if self.width == Some(0) {
            return Err(ValidationError::ZeroWidth);
        }
        Ok(())
    }
}

/// What a single pair turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PairKind {
    /// Empty property: no output.
    Skip,
    /// Whitespace-only property: one blank row.
    Blank,
    Row,
}

pub(crate) fn classify(property: &str) -> PairKind {
    if property.is_empty() {
        PairKind::Skip
    } else if property.chars().all(char::is_whitespace) {
        PairKind::Blank
    } else {
        PairKind::Row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_pairs() {
        let req = LayoutRequest::new()
            .body_align(Align::Center)
            .padding(4)
            .width(60)
            .pair("name", "Alice")
            .pair("age", "30");
        assert_eq!(req.body_align, Align::Center);
        assert_eq!(req.width, Some(60));
        assert_eq!(req.pairs.len(), 2);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn tokens_must_be_even() {
        let mut req = LayoutRequest::new();
        req.push_tokens(["name", "Alice", "age", "30"]).unwrap();
        assert_eq!(req.pairs[1], ("age".to_string(), "30".to_string()));

        assert_eq!(
            req.push_tokens(["orphan"]),
            Err(ValidationError::OddPairCount(1))
        );
        assert_eq!(req.pairs.len(), 2);
    }

    #[test]
    fn padding_and_width_validation() {
        assert_eq!(
            LayoutRequest::new().padding(0).validate(),
            Err(ValidationError::Padding(0))
        );
        assert_eq!(
            LayoutRequest::new().width(0).validate(),
            Err(ValidationError::ZeroWidth)
        );
    }

    #[test]
    fn pair_classification() {
        assert_eq!(classify(""), PairKind::Skip);
        assert_eq!(classify(" "), PairKind::Blank);
        assert_eq!(classify("   "), PairKind::Blank);
        assert_eq!(classify(" x "), PairKind::Row);
    }
}
