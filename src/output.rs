//! Output sinks for rendered lines.
//!
//! Renderers return `Vec<String>`; a [`LineSink`] is where the
//! [`Printer`](crate::Printer) puts them once a render succeeded.

use std::io::{self, Write};

/// Anything accepting an ordered sequence of text lines.
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn write_lines(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

// =============================================================================
// OutputBuffer
// =============================================================================

/// Accumulates lines and writes them out in a single syscall.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Empty buffer with room for a screenful of lines.
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Empty buffer with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Buffered bytes, newlines included.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Flush buffer to stdout.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        self.flush_to(&mut stdout)?;
        stdout.flush()
    }

    /// Flush buffer to a writer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        self.data.clear();
        Ok(())
    }

    /// Buffered data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl LineSink for OutputBuffer {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.data.extend_from_slice(line.as_bytes());
        self.data.push(b'\n');
        Ok(())
    }
}

/// Writes each line straight through to an `io::Write`.
#[derive(Debug)]
pub struct WriterSink<W: Write>(pub W);

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.0, "{line}")
    }
}
