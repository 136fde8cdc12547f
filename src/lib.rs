//! # termlayout
//!
//! Terminal text layout for message-printing scripts: aligned
//! property/value tables, bordered strings and section headings.
//!
//! ## Architecture
//!
//! Rendering is pure. Every renderer takes an explicit line width and
//! returns the lines it would print, each exactly that wide:
//!
//! ```text
//! LayoutRequest ─► compute_columns ─► wrap_words ─► justify ─► Vec<String>
//! ```
//!
//! The [`Printer`] adds the two side effects: it asks a [`TerminalInfo`] for
//! the width when none was given, and writes finished lines to a
//! [`LineSink`].
//!
//! ```
//! use termlayout::{Align, LayoutRequest, render_property_table};
//!
//! let request = LayoutRequest::new()
//!     .body_align(Align::Left)
//!     .padding(2)
//!     .pair("name", "Alice")
//!     .pair("age", "30");
//! let lines = render_property_table(&request, 40).unwrap();
//! assert_eq!(lines.len(), 2);
//! assert!(lines.iter().all(|line| line.len() == 40));
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Align, WidthMetric, heading styles
//! - [`layout`] - table, border and heading renderers
//! - [`text_measure`] - string widths and word wrapping
//! - [`terminal`] - terminal size providers
//! - [`output`] - line sinks
//! - [`config`] - settings from TOML and the environment

pub mod config;
pub mod error;
pub mod layout;
pub mod output;
pub mod printer;
pub mod terminal;
pub mod text_measure;
pub mod types;

pub use types::*;

pub use error::{LayoutError, ValidationError};

pub use layout::{
    ColumnWidths, LayoutRequest, compute_columns, render_bordered_string, render_heading,
    render_heading_style, render_property_table,
};

pub use config::{ConfigError, Settings};
pub use output::{LineSink, OutputBuffer, WriterSink};
pub use printer::Printer;
pub use terminal::{CrosstermTerminal, DetectTerminal, EnvTerminal, FixedTerminal, TerminalInfo};
pub use text_measure::{measure, string_width, wrap_words};
