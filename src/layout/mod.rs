//! Layout Module
//!
//! Pure renderers: every function takes an explicit line width and returns
//! the lines it would print. Width resolution and output live in
//! [`Printer`](crate::Printer).
//!
//! - [`render_property_table`] - aligned, wrapped property/value rows
//! - [`render_bordered_string`] - text centered between border runs
//! - [`render_heading`] - named heading presets built on bordered strings

mod border;
mod columns;
mod heading;
mod request;
mod table;

pub use border::render_bordered_string;
pub use columns::{ColumnWidths, center_shift, central_widths, compute_columns};
pub use heading::{render_heading, render_heading_style};
pub use request::LayoutRequest;
pub use table::{justify, render_property_table};
