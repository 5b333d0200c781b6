//! Incremental, resumable CSV parsing over sequential byte streams
//!
//! Furrow reads quote-aware delimited text from any [`std::io::Read`] source
//! through a fixed-size buffer, producing rows of unescaped cell values
//! without ever holding the whole input in memory. The absolute offset of
//! the next unread cell can be saved at any row boundary and later replayed
//! with [`RowCursor::skip_to`] on a fresh cursor to resume a parse where it
//! left off.
//!
//! Comma, LF, CR, and CRLF delimiters are recognized; quoted cells may embed
//! commas, newlines, and doubled quotes. Errors never interrupt the row
//! loop: iteration simply stops, and [`RowCursor::finish`] reports what went
//! wrong.
//!
//! ```
//! use furrow_core::{Input, RowCursor};
//!
//! # fn main() -> furrow_core::Result<()> {
//! let mut cursor = RowCursor::open(Input::from_text("name,qty\n\"a,b\",2\n"))?;
//! while let Some(row) = cursor.next_row() {
//!     println!("{row:?}");
//! }
//! cursor.finish()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod buffer;
mod scanner;

pub mod config;
pub mod cursor;
pub mod error;
pub mod input;

// Re-export key types
pub use config::{CursorConfig, CursorConfigBuilder, DEFAULT_BUFFER_CAPACITY, MIN_BUFFER_CAPACITY};
pub use cursor::{RowCursor, Rows};
pub use error::{ParseError, Result};
pub use input::Input;
