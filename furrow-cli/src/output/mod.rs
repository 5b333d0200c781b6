//! Output formatting module

use anyhow::Result;

/// Trait for row output formatters
pub trait RowFormatter {
    /// Format and output a single row
    fn format_row(&mut self, index: u64, offset: u64, cells: &[String]) -> Result<()>;

    /// Finalize output (e.g. close a JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
