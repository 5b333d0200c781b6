//! Row-level iteration over a CSV stream

use std::io::Read;

use crate::buffer::ScanBuffer;
use crate::config::CursorConfig;
use crate::error::{ParseError, Result};
use crate::input::Input;
use crate::scanner::{scan_cell, Delimiter, ScannedCell, QUOTE};

/// Incremental cursor over the rows of a CSV stream
///
/// The cursor pulls bytes from a sequential source through a fixed-size
/// buffer, so arbitrarily large inputs are parsed without being held in
/// memory. Iteration is strictly forward; the absolute offset of the next
/// unread cell can be saved at any row boundary and replayed with
/// [`skip_to`](Self::skip_to) on a fresh cursor over the same source.
///
/// Errors never interrupt the row loop: the first one is recorded, iteration
/// stops, and [`finish`](Self::finish) reports it. A cursor is a single
/// logical owner of its buffer and source; it is not meant to be shared.
pub struct RowCursor<R> {
    reader: R,
    buf: ScanBuffer,
    scanned: Option<ScannedCell>,
}

impl<R: Read> RowCursor<R> {
    /// Create a cursor with the default configuration
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, CursorConfig::default())
    }

    /// Create a cursor with a custom configuration
    pub fn with_config(reader: R, config: CursorConfig) -> Self {
        Self {
            reader,
            buf: ScanBuffer::new(config.buffer_capacity),
            scanned: None,
        }
    }

    /// True while another row is available
    ///
    /// Idempotent: the classification of the next cell is cached and reused
    /// by [`next_row`](Self::next_row).
    pub fn has_next(&mut self) -> bool {
        self.classify().is_some()
    }

    /// Produce the next row of unescaped cell values
    ///
    /// Cells are consumed while their delimiter is a comma; the row is
    /// returned once a newline or the end of input is consumed. Returns
    /// `None` when no further row is available.
    pub fn next_row(&mut self) -> Option<Vec<String>> {
        let mut cell = self.classify()?;
        let mut row = Vec::new();
        loop {
            self.scanned = None;
            row.push(self.take_cell(cell)?);
            match cell.delimiter {
                Delimiter::Comma => {}
                Delimiter::Newline | Delimiter::EndOfInput => return Some(row),
            }
            cell = match self.classify() {
                Some(next) => next,
                // a terminal error discards the unfinished row
                None if self.buf.has_fatal() => return None,
                // trailing comma at end of input: one final empty cell
                None => ScannedCell {
                    len: 0,
                    delimited_len: 0,
                    delimiter: Delimiter::EndOfInput,
                    quoted: false,
                },
            };
        }
    }

    /// Absolute byte offset of the next unread cell
    ///
    /// Taken at a row boundary this is a checkpoint: feed it to
    /// [`skip_to`](Self::skip_to) on a fresh cursor over the same source to
    /// resume without re-parsing earlier rows.
    pub fn offset(&self) -> u64 {
        self.buf.offset()
    }

    /// Read and discard bytes until the cursor sits at `target`
    ///
    /// The source is sequential, so this blocks in proportion to the
    /// distance skipped. Skipping backwards is an error, as is a source that
    /// ends or fails before the target is reached.
    pub fn skip_to(&mut self, target: u64) -> Result<()> {
        if target < self.offset() {
            return Err(ParseError::Config(format!(
                "cannot skip backwards from offset {} to {target}",
                self.offset()
            )));
        }
        self.scanned = None;
        let mut remaining = target - self.offset();
        while remaining > 0 {
            if !self.buf.make_readable(&mut self.reader, 0) {
                if let Some(err) = self.buf.pending() {
                    return Err(err.clone());
                }
                return Err(ParseError::Io(format!(
                    "source ended {remaining} bytes before offset {target}"
                )));
            }
            let step = u64::min(self.buf.buffered_len() as u64, remaining) as usize;
            self.buf.commit(step);
            remaining -= step as u64;
        }
        Ok(())
    }

    /// Report the error recorded during iteration, if any
    ///
    /// Call once [`has_next`](Self::has_next)/[`next_row`](Self::next_row)
    /// stop producing rows to tell a clean end of input from a failure. The
    /// recorded error is kept, so repeated calls keep reporting it.
    pub fn finish(&mut self) -> Result<()> {
        match self.buf.pending() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    /// Borrowing iterator over the remaining rows
    pub fn rows(&mut self) -> Rows<'_, R> {
        Rows { cursor: self }
    }

    fn classify(&mut self) -> Option<ScannedCell> {
        if self.scanned.is_none() {
            self.scanned = scan_cell(&mut self.buf, &mut self.reader);
        }
        self.scanned
    }

    /// Materialize and consume the classified cell at the committed start
    fn take_cell(&mut self, cell: ScannedCell) -> Option<String> {
        let bytes = self.buf.cell_bytes(cell.len);
        let raw = if cell.quoted {
            unescape(&bytes[1..cell.len - 1])
        } else {
            bytes.to_vec()
        };
        let offset = self.buf.offset();
        self.buf.commit(cell.delimited_len);
        match String::from_utf8(raw) {
            Ok(value) => Some(value),
            Err(_) => {
                self.buf.record_fatal(ParseError::Encoding { offset });
                None
            }
        }
    }
}

impl RowCursor<Box<dyn Read + Send>> {
    /// Create a cursor over any [`Input`] with the default configuration
    pub fn open(input: Input) -> Result<Self> {
        Ok(Self::new(input.into_reader()?))
    }

    /// Create a cursor over any [`Input`] with a custom configuration
    pub fn open_with_config(input: Input, config: CursorConfig) -> Result<Self> {
        Ok(Self::with_config(input.into_reader()?, config))
    }
}

impl<R> std::fmt::Debug for RowCursor<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowCursor")
            .field("offset", &self.buf.offset())
            .field("exhausted", &self.buf.exhausted())
            .finish()
    }
}

/// Iterator adapter returned by [`RowCursor::rows`]
pub struct Rows<'a, R> {
    cursor: &'a mut RowCursor<R>,
}

impl<R: Read> Iterator for Rows<'_, R> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next_row()
    }
}

/// Collapse doubled quotes in the inner content of a quoted cell
///
/// The scanner guarantees every quote in `raw` is one of a doubled pair.
fn unescape(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        out.push(raw[i]);
        i += if raw[i] == QUOTE { 2 } else { 1 };
    }
    out
}
