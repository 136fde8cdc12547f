//! Core types for termlayout.
//!
//! Alignment selectors, width metrics and the heading style table.
//! Everything a render call is parameterized by lives here.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{LayoutError, ValidationError};

/// Minimum width reserved for a table column, whatever its content.
pub const WIDTH_MIN: usize = 15;

// =============================================================================
// Alignment
// =============================================================================

/// Horizontal alignment.
///
/// Used both as body alignment (where the two-column block sits on the line)
/// and as content alignment (how text is justified inside a column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = ValidationError;

    /// Accepts `left`, `center`, `right`, with or without a leading `--`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_start_matches("--") {
            "left" => Ok(Align::Left),
            "center" => Ok(Align::Center),
            "right" => Ok(Align::Right),
            _ => Err(ValidationError::Alignment(s.to_string())),
        }
    }
}

// =============================================================================
// Width Metric
// =============================================================================

/// How the length of a string is counted for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthMetric {
    /// Byte length. Matches the shell implementation, where `${#var}` is
    /// what the layout was tuned against.
    #[default]
    Bytes,
    /// Terminal cells: ANSI escapes are zero-width, CJK and emoji are 2.
    Cells,
}

impl FromStr for WidthMetric {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bytes" => Ok(WidthMetric::Bytes),
            "cells" => Ok(WidthMetric::Cells),
            _ => Err(ValidationError::InvalidValue {
                name: "metric",
                value: s.to_string(),
            }),
        }
    }
}

/// Parse a string that must hold exactly one character (separator, border).
pub fn parse_single_char(s: &str) -> Result<char, ValidationError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ValidationError::NotSingleChar(s.to_string())),
    }
}

// =============================================================================
// Heading Styles
// =============================================================================

bitflags::bitflags! {
    /// Border-only lines drawn around a heading.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct BorderLines: u8 {
        const NONE = 0;
        const TOP = 1 << 0;
        const BOTTOM = 1 << 1;
        const BOTH = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

/// Named heading presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingStyle {
    Heading1,
    Heading2,
    Heading3,
    Warning,
    Error,
}

impl HeadingStyle {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "heading1" => Some(HeadingStyle::Heading1),
            "heading2" => Some(HeadingStyle::Heading2),
            "heading3" => Some(HeadingStyle::Heading3),
            "warning" => Some(HeadingStyle::Warning),
            "error" => Some(HeadingStyle::Error),
            _ => None,
        }
    }

    /// The preset this style resolves to.
    pub fn spec(self) -> HeadingSpec {
        match self {
            HeadingStyle::Heading1 => HeadingSpec {
                border: '#',
                padding: 2,
                border_lines: BorderLines::BOTH,
                padding_top: 1,
                padding_bottom: 1,
                marker: None,
            },
            HeadingStyle::Heading2 => HeadingSpec {
                border: '=',
                padding: 2,
                border_lines: BorderLines::NONE,
                padding_top: 1,
                padding_bottom: 1,
                marker: None,
            },
            HeadingStyle::Heading3 => HeadingSpec {
                border: '-',
                padding: 1,
                border_lines: BorderLines::NONE,
                padding_top: 1,
                padding_bottom: 0,
                marker: None,
            },
            HeadingStyle::Warning => HeadingSpec {
                border: '*',
                padding: 2,
                border_lines: BorderLines::BOTH,
                padding_top: 1,
                padding_bottom: 1,
                marker: Some("[WARNING] "),
            },
            HeadingStyle::Error => HeadingSpec {
                border: '!',
                padding: 2,
                border_lines: BorderLines::BOTH,
                padding_top: 1,
                padding_bottom: 1,
                marker: Some("[ERROR] "),
            },
        }
    }
}

/// Resolved heading parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingSpec {
    pub border: char,
    /// Spaces between the border run and the text.
    pub padding: usize,
    pub border_lines: BorderLines,
    /// Empty lines emitted before the heading.
    pub padding_top: usize,
    /// Empty lines emitted after the heading.
    pub padding_bottom: usize,
    /// Prefix put in front of the heading text.
    pub marker: Option<&'static str>,
}

impl HeadingSpec {
    /// Resolve a style token such as `--heading1`, `warning` or `heading2-02`.
    ///
    /// A `-N` suffix sets both blank-line paddings to `N`; `-NM` sets the
    /// padding before to `N` and after to `M`.
    pub fn parse(token: &str) -> Result<Self, LayoutError> {
        let unknown = || LayoutError::UnknownStyle(token.to_string());
        let body = token.strip_prefix("--").unwrap_or(token);

        let (name, suffix) = match body.split_once('-') {
            Some((name, suffix)) => (name, Some(suffix)),
            None => (body, None),
        };

        let mut spec = HeadingStyle::from_name(name).ok_or_else(unknown)?.spec();

        if let Some(suffix) = suffix {
            let digits: Vec<usize> = suffix
                .chars()
                .map(|c| c.to_digit(10).map(|d| d as usize))
                .collect::<Option<_>>()
                .ok_or_else(unknown)?;
            match digits.as_slice() {
                [both] => {
                    spec.padding_top = *both;
                    spec.padding_bottom = *both;
                }
                [top, bottom] => {
                    spec.padding_top = *top;
                    spec.padding_bottom = *bottom;
                }
                _ => return Err(unknown()),
            }
        }

        Ok(spec)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_parses_with_and_without_dashes() {
        assert_eq!("left".parse::<Align>(), Ok(Align::Left));
        assert_eq!("--center".parse::<Align>(), Ok(Align::Center));
        assert_eq!("--right".parse::<Align>(), Ok(Align::Right));
    }

    #[test]
    fn align_rejects_unknown_token() {
        assert_eq!(
            "--middle".parse::<Align>(),
            Err(ValidationError::Alignment("--middle".to_string()))
        );
    }

    #[test]
    fn single_char_parsing() {
        assert_eq!(parse_single_char(":"), Ok(':'));
        assert_eq!(parse_single_char("│"), Ok('│'));
        assert!(parse_single_char("").is_err());
        assert!(parse_single_char("::").is_err());
    }

    #[test]
    fn heading_spec_from_plain_names() {
        let spec = HeadingSpec::parse("--error").unwrap();
        assert_eq!(spec.border, '!');
        assert_eq!(spec.marker, Some("[ERROR] "));
        assert_eq!(spec.border_lines, BorderLines::BOTH);

        let spec = HeadingSpec::parse("heading3").unwrap();
        assert_eq!(spec.border, '-');
        assert!(spec.border_lines.is_empty());
    }

    #[test]
    fn heading_spec_numeric_suffix() {
        let spec = HeadingSpec::parse("--heading1-0").unwrap();
        assert_eq!((spec.padding_top, spec.padding_bottom), (0, 0));

        let spec = HeadingSpec::parse("heading2-21").unwrap();
        assert_eq!((spec.padding_top, spec.padding_bottom), (2, 1));
    }

    #[test]
    fn heading_spec_unknown() {
        assert!(matches!(
            HeadingSpec::parse("--heading4"),
            Err(LayoutError::UnknownStyle(s)) if s == "--heading4"
        ));
        assert!(HeadingSpec::parse("heading1-x").is_err());
        assert!(HeadingSpec::parse("heading1-123").is_err());
        assert!(HeadingSpec::parse("heading1-").is_err());
    }
}
