//! Terminal size providers.
//!
//! Layout never queries the terminal itself. Callers hand a [`TerminalInfo`]
//! to the [`Printer`](crate::Printer), which consults it once per call when
//! no explicit width was given.

use crate::error::{LayoutError, ValidationError};

/// Source of the terminal dimensions.
pub trait TerminalInfo {
    /// `(columns, rows)`, or `None` when the size cannot be determined.
    fn size(&self) -> Option<(u16, u16)>;

    /// Width to lay out against: `explicit` if given, else the terminal's columns.
    fn resolve_width(&self, explicit: Option<usize>) -> Result<usize, LayoutError> {
        let width = match explicit {
            Some(width) => width,
            None => self
                .size()
                .map(|(cols, _)| cols as usize)
                .ok_or(ValidationError::WidthUnavailable)?,
        };
        if width == 0 {
            return Err(ValidationError::ZeroWidth.into());
        }
        tracing::debug!(width, explicit = explicit.is_some(), "resolved line width");
        Ok(width)
    }
}

impl<T: TerminalInfo + ?Sized> TerminalInfo for &T {
    fn size(&self) -> Option<(u16, u16)> {
        (**self).size()
    }
}

// =============================================================================
// Providers
// =============================================================================

/// Queries the controlling terminal through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosstermTerminal;

impl TerminalInfo for CrosstermTerminal {
    fn size(&self) -> Option<(u16, u16)> {
        crossterm::terminal::size().ok().filter(|&(cols, _)| cols > 0)
    }
}

/// Reads `COLUMNS` and `LINES`, the way shells export the window size.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvTerminal;

impl TerminalInfo for EnvTerminal {
    fn size(&self) -> Option<(u16, u16)> {
        let read = |name: &str| std::env::var(name).ok()?.trim().parse::<u16>().ok();
        let cols = read("COLUMNS").filter(|&c| c > 0)?;
        Some((cols, read("LINES").unwrap_or(24)))
    }
}

/// Fixed dimensions, or none at all. Used for tests and piped output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedTerminal(pub Option<(u16, u16)>);

impl FixedTerminal {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self(Some((columns, rows)))
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl TerminalInfo for FixedTerminal {
    fn size(&self) -> Option<(u16, u16)> {
        self.0
    }
}

/// Tries the terminal first, then the environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectTerminal;

impl TerminalInfo for DetectTerminal {
    fn size(&self) -> Option<(u16, u16)> {
        CrosstermTerminal.size().or_else(|| EnvTerminal.size())
    }
}

// =============================================================================
// Tests
// =============================================================================
