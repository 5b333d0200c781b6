//! Markdown output formatter

use std::io::Write;

use anyhow::Result;

use super::RowFormatter;

/// Markdown formatter - outputs rows as a pipe table with a summary footer
///
/// The first row becomes the table header, followed by the separator line
/// GFM requires before the data rows.
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    rows: u64,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0 }
    }
}

impl<W: Write> RowFormatter for MarkdownFormatter<W> {
    fn format_row(&mut self, _index: u64, _offset: u64, cells: &[String]) -> Result<()> {
        let escaped: Vec<String> = cells.iter().map(|c| escape_cell(c)).collect();
        writeln!(self.writer, "| {} |", escaped.join(" | "))?;
        if self.rows == 0 {
            writeln!(self.writer, "| {} |", vec!["---"; cells.len()].join(" | "))?;
        }
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total rows: {}*", self.rows)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Make a cell value safe inside a GFM table row
///
/// Pipes would end the cell and embedded newlines would split the row, so
/// both are rewritten before the cell is placed in the table.
fn escape_cell(cell: &str) -> String {
    cell.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}
