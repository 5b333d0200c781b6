//! Cursor configuration

use crate::error::{ParseError, Result};

/// Default scan buffer capacity in bytes
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

/// Smallest accepted buffer capacity
///
/// The scanner needs room for at least a few cell bytes plus a CRLF
/// delimiter of look-ahead.
pub const MIN_BUFFER_CAPACITY: usize = 16;

/// Configuration for a [`RowCursor`](crate::RowCursor)
#[derive(Debug, Clone)]
pub struct CursorConfig {
    /// Scan buffer capacity in bytes
    ///
    /// The buffer is allocated once at construction and reused for the
    /// cursor's whole lifetime. It also bounds the longest single cell plus
    /// its trailing delimiter; a longer cell is reported as
    /// [`ParseError::CellOverflow`]. Values below [`MIN_BUFFER_CAPACITY`]
    /// are raised to that minimum.
    pub buffer_capacity: usize,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl CursorConfig {
    /// Create a builder
    pub fn builder() -> CursorConfigBuilder {
        CursorConfigBuilder::default()
    }
}

/// Builder for [`CursorConfig`]
#[derive(Debug, Default)]
pub struct CursorConfigBuilder {
    buffer_capacity: Option<usize>,
}

impl CursorConfigBuilder {
    /// Set the scan buffer capacity in bytes
    pub fn buffer_capacity(mut self, bytes: usize) -> Self {
        self.buffer_capacity = Some(bytes);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<CursorConfig> {
        let buffer_capacity = self.buffer_capacity.unwrap_or(DEFAULT_BUFFER_CAPACITY);
        if buffer_capacity < MIN_BUFFER_CAPACITY {
            return Err(ParseError::Config(format!(
                "buffer capacity must be at least {MIN_BUFFER_CAPACITY} bytes, got {buffer_capacity}"
            )));
        }
        Ok(CursorConfig { buffer_capacity })
    }
}
