//! JSON output formatter

use std::io::Write;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::RowFormatter;

/// JSON formatter - outputs rows as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    rows: Vec<RowData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct RowData {
    /// Zero-based row index
    pub row: u64,
    /// Absolute byte offset of the row start
    pub offset: u64,
    /// Unescaped cell values
    pub cells: Vec<String>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            rows: Vec::new(),
        }
    }
}

impl<W: Write> RowFormatter for JsonFormatter<W> {
    fn format_row(&mut self, index: u64, offset: u64, cells: &[String]) -> Result<()> {
        self.rows.push(RowData {
            row: index,
            offset,
            cells: cells.to_vec(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.rows)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.rows)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_parses_back() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out, false);
            formatter
                .format_row(0, 0, &["a".into(), "b".into()])
                .unwrap();
            formatter.format_row(1, 4, &["c".into()]).unwrap();
            formatter.finish().unwrap();
        }

        let rows: Vec<RowData> = serde_json::from_slice(&out).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells, vec!["a", "b"]);
        assert_eq!(rows[1].offset, 4);
    }

    #[test]
    fn test_empty_input_is_an_empty_array() {
        let mut out = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut out, false);
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
