//! Text measurement for terminal layout.
//!
//! - **Width**: byte length (shell-compatible default) or terminal cells
//! - **ANSI stripping**: escape sequences are zero-width in cell mode
//! - **Wrapping**: greedy whitespace wrap with forced breaks for long words

mod ansi;
mod width;
mod wrap;

pub use ansi::strip_ansi;
pub use width::{char_width, grapheme_width, measure, string_width, widest_line};
pub use wrap::wrap_words;
