//! Printer: the layout renderers wired to a terminal and an output sink.

use crate::error::LayoutError;
use crate::layout::{LayoutRequest, render_bordered_string, render_heading, render_property_table};
use crate::output::LineSink;
use crate::terminal::TerminalInfo;
use crate::types::{HeadingSpec, WidthMetric};

/// Renders into a [`LineSink`], taking default widths from a [`TerminalInfo`].
///
/// A render either writes all of its lines or none of them.
#[derive(Debug)]
pub struct Printer<T: TerminalInfo, S: LineSink> {
    terminal: T,
    sink: S,
    metric: WidthMetric,
}

impl<T: TerminalInfo, S: LineSink> Printer<T, S> {
    pub fn new(terminal: T, sink: S) -> Self {
        Self {
            terminal,
            sink,
            metric: WidthMetric::default(),
        }
    }

    /// Metric for bordered strings and headings. Tables carry their own.
    pub fn with_metric(mut self, metric: WidthMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn print_propvalue(&mut self, request: &LayoutRequest) -> Result<(), LayoutError> {
        request.validate()?;
        let width = self.terminal.resolve_width(request.width)?;
        let lines = render_property_table(request, width)?;
        self.emit(&lines)
    }

    pub fn print_borderstring(
        &mut self,
        text: &str,
        border: char,
        padding: usize,
        width: Option<usize>,
    ) -> Result<(), LayoutError> {
        let width = self.terminal.resolve_width(width)?;
        let lines = render_bordered_string(text, border, padding, width, self.metric)?;
        self.emit(&lines)
    }

    pub fn print_heading(
        &mut self,
        style: &str,
        text: &str,
        width: Option<usize>,
    ) -> Result<(), LayoutError> {
        let spec = HeadingSpec::parse(style)?;
        self.print_heading_spec(&spec, text, width)
    }

    pub fn print_heading_spec(
        &mut self,
        spec: &HeadingSpec,
        text: &str,
        width: Option<usize>,
    ) -> Result<(), LayoutError> {
        let width = self.terminal.resolve_width(width)?;
        let lines = render_heading(spec, text, width, self.metric)?;
        self.emit(&lines)
    }

    fn emit(&mut self, lines: &[String]) -> Result<(), LayoutError> {
        self.sink.write_lines(lines)?;
        Ok(())
    }
}
