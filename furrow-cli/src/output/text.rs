//! Plain text output formatter

use std::io::{self, Write};

use anyhow::Result;

use super::RowFormatter;

/// Plain text formatter - one row per line, cells joined by tabs
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> RowFormatter for TextFormatter<W> {
    fn format_row(&mut self, _index: u64, _offset: u64, cells: &[String]) -> Result<()> {
        writeln!(self.writer, "{}", cells.join("\t"))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
