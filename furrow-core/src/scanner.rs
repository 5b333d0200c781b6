//! Per-cell classification and measurement
//!
//! The scanner measures exactly one cell at the committed start of the scan
//! buffer without materializing its value: whether it is quoted, where it
//! truly ends, and how long its trailing delimiter is. All positions are
//! relative to the committed start, so they survive buffer compaction.

use std::io::Read;

use crate::buffer::ScanBuffer;
use crate::error::ParseError;

pub(crate) const QUOTE: u8 = b'"';
const COMMA: u8 = b',';
const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// What terminated a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    /// Comma; the row continues
    Comma,
    /// LF, CR, or CRLF; the row is complete
    Newline,
    /// The source ended; the row and the stream are complete
    EndOfInput,
}

/// One measured cell and its trailing delimiter
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScannedCell {
    /// Cell length in bytes, quotes included for quoted cells
    pub(crate) len: usize,
    /// Distance from the cell start through the consumed delimiter
    pub(crate) delimited_len: usize,
    /// What terminated the cell
    pub(crate) delimiter: Delimiter,
    /// True when the cell began with a quote
    pub(crate) quoted: bool,
}

/// Classify and measure the cell at the committed start of `buf`
///
/// Returns `None` when no further cell exists: the source is exhausted at a
/// cell boundary, or a terminal error has been recorded.
pub(crate) fn scan_cell(buf: &mut ScanBuffer, reader: &mut impl Read) -> Option<ScannedCell> {
    if buf.has_fatal() {
        return None;
    }
    if !buf.make_readable(reader, 0) {
        return None;
    }
    if buf.byte_at(0) == QUOTE {
        scan_quoted(buf, reader)
    } else {
        scan_unquoted(buf, reader)
    }
}

fn scan_unquoted(buf: &mut ScanBuffer, reader: &mut impl Read) -> Option<ScannedCell> {
    let mut i = 0;
    loop {
        if !buf.make_readable(reader, i) {
            // the stream ends here: the rest of the cell has no delimiter
            return at_input_end(buf).then_some(ScannedCell {
                len: i,
                delimited_len: i,
                delimiter: Delimiter::EndOfInput,
                quoted: false,
            });
        }
        match buf.byte_at(i) {
            QUOTE => {
                buf.record_fatal(ParseError::StrayQuote {
                    offset: buf.offset() + i as u64,
                });
                return None;
            }
            COMMA => {
                return Some(ScannedCell {
                    len: i,
                    delimited_len: i + 1,
                    delimiter: Delimiter::Comma,
                    quoted: false,
                })
            }
            LF => {
                return Some(ScannedCell {
                    len: i,
                    delimited_len: i + 1,
                    delimiter: Delimiter::Newline,
                    quoted: false,
                })
            }
            CR => {
                let newline = newline_len(buf, reader, i)?;
                return Some(ScannedCell {
                    len: i,
                    delimited_len: i + newline,
                    delimiter: Delimiter::Newline,
                    quoted: false,
                });
            }
            _ => i += 1,
        }
    }
}

fn scan_quoted(buf: &mut ScanBuffer, reader: &mut impl Read) -> Option<ScannedCell> {
    // find the true closing quote, skipping doubled (escaped) quotes
    let mut i = 1;
    let len = loop {
        if !buf.make_readable(reader, i) {
            if at_input_end(buf) {
                buf.record_fatal(ParseError::UnclosedQuote {
                    offset: buf.offset(),
                });
            }
            return None;
        }
        if buf.byte_at(i) == QUOTE {
            if buf.make_readable(reader, i + 1) {
                if buf.byte_at(i + 1) == QUOTE {
                    i += 2;
                    continue;
                }
                break i + 1;
            }
            if !at_input_end(buf) {
                return None;
            }
            // closing quote is the last byte of the stream
            break i + 1;
        }
        i += 1;
    };

    // trailing spaces and tabs are permitted between the closing quote and
    // the delimiter, but are not part of the cell
    let mut j = len;
    loop {
        if !buf.make_readable(reader, j) {
            return at_input_end(buf).then_some(ScannedCell {
                len,
                delimited_len: j,
                delimiter: Delimiter::EndOfInput,
                quoted: true,
            });
        }
        match buf.byte_at(j) {
            b' ' | b'\t' => j += 1,
            COMMA => {
                return Some(ScannedCell {
                    len,
                    delimited_len: j + 1,
                    delimiter: Delimiter::Comma,
                    quoted: true,
                })
            }
            LF => {
                return Some(ScannedCell {
                    len,
                    delimited_len: j + 1,
                    delimiter: Delimiter::Newline,
                    quoted: true,
                })
            }
            CR => {
                let newline = newline_len(buf, reader, j)?;
                return Some(ScannedCell {
                    len,
                    delimited_len: j + newline,
                    delimiter: Delimiter::Newline,
                    quoted: true,
                });
            }
            other => {
                buf.record_fatal(ParseError::DelimiterExpected {
                    offset: buf.offset() + j as u64,
                    found: other as char,
                });
                return None;
            }
        }
    }
}

/// Length of the newline delimiter whose CR sits at `rel`
///
/// A lone CR is a complete delimiter unless immediately followed by LF, in
/// which case the pair forms one delimiter. `None` means the look-ahead ran
/// into the capacity limit.
fn newline_len(buf: &mut ScanBuffer, reader: &mut impl Read, rel: usize) -> Option<usize> {
    if buf.make_readable(reader, rel + 1) {
        if buf.byte_at(rel + 1) == LF {
            Some(2)
        } else {
            Some(1)
        }
    } else if at_input_end(buf) {
        Some(1)
    } else {
        None
    }
}

/// Distinguish true end-of-input from a full buffer after a failed read
///
/// Called when a needed position is unreadable. Exhausted means the stream
/// genuinely ends there; otherwise the buffer is full and the active cell is
/// over capacity, which is recorded as a terminal error.
fn at_input_end(buf: &mut ScanBuffer) -> bool {
    if buf.exhausted() {
        return true;
    }
    buf.record_fatal(ParseError::CellOverflow {
        offset: buf.offset(),
        capacity: buf.capacity(),
    });
    false
}
