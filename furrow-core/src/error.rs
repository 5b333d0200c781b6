//! Error types for incremental CSV parsing

use thiserror::Error;

/// Errors recorded while scanning a CSV stream
///
/// The scan loop never returns these directly. The cursor records the first
/// error it hits, iteration stops at the next row boundary, and
/// [`RowCursor::finish`](crate::RowCursor::finish) hands the recorded error
/// back once the caller has observed that iteration stopped. All variants are
/// `Clone`; read failures carry the rendered message rather than the
/// underlying `io::Error`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// End of input reached while still inside a quoted cell
    #[error("unclosed quoted cell starting at offset {offset}")]
    UnclosedQuote {
        /// Absolute byte offset of the opening quote
        offset: u64,
    },

    /// Quote character inside a cell that did not start with one
    #[error("quote in unquoted cell at offset {offset}")]
    StrayQuote {
        /// Absolute byte offset of the stray quote
        offset: u64,
    },

    /// Non-whitespace between a quoted cell's closing quote and its delimiter
    #[error("expected delimiter after closing quote at offset {offset}, found {found:?}")]
    DelimiterExpected {
        /// Absolute byte offset of the offending byte
        offset: u64,
        /// The byte found where a delimiter was required
        found: char,
    },

    /// A cell and its trailing delimiter exceed the scan buffer capacity
    #[error("cell at offset {offset} exceeds the buffer capacity of {capacity} bytes")]
    CellOverflow {
        /// Absolute byte offset of the start of the oversized cell
        offset: u64,
        /// Configured buffer capacity in bytes
        capacity: usize,
    },

    /// Cell content is not valid UTF-8
    #[error("cell at offset {offset} is not valid UTF-8")]
    Encoding {
        /// Absolute byte offset of the start of the cell
        offset: u64,
    },

    /// Read failure from the underlying source
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid cursor configuration or checkpoint
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::Io(err.to_string())
    }
}

/// Result type for cursor operations
pub type Result<T> = std::result::Result<T, ParseError>;
