//! Input abstraction for cursor construction
//!
//! Provides a unified way to hand a cursor its byte source, whether the
//! caller holds a string, a byte vector, a path, or an arbitrary reader.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::PathBuf;

use crate::error::{ParseError, Result};

/// Source of CSV bytes for a [`RowCursor`](crate::RowCursor)
pub enum Input {
    /// Direct text string
    Text(String),
    /// Bytes to parse as UTF-8 text
    Bytes(Vec<u8>),
    /// File path to read from
    File(PathBuf),
    /// Reader stream (for stdin, network, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::Bytes(bytes) => f
                .debug_tuple("Bytes")
                .field(&format!("<{} bytes>", bytes.len()))
                .finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Turn the input into a sequential reader
    ///
    /// Files are wrapped in a [`BufReader`]; in-memory inputs become
    /// [`io::Cursor`] streams.
    pub fn into_reader(self) -> Result<Box<dyn Read + Send>> {
        match self {
            Input::Text(text) => Ok(Box::new(io::Cursor::new(text.into_bytes()))),
            Input::Bytes(bytes) => Ok(Box::new(io::Cursor::new(bytes))),
            Input::File(path) => {
                let file = File::open(&path).map_err(|e| {
                    ParseError::Io(format!("failed to open {}: {e}", path.display()))
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
            Input::Reader(reader) => Ok(reader),
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}
