//! Fixed-capacity scan buffer with compaction and deferred error capture

use std::io::{ErrorKind, Read};

use crate::config::MIN_BUFFER_CAPACITY;
use crate::error::ParseError;

/// Scan buffer owned by a single cursor
///
/// Valid content lives in `[start, end)`, with `start <= end <= capacity`.
/// `start` is the committed left edge of the cell currently being scanned;
/// compaction slides `[start, end)` to the front of the buffer and accounts
/// the discarded prefix in `consumed`, so `consumed + start` is always the
/// absolute offset of the next unread cell. The scanner addresses bytes
/// relative to `start`, which keeps its positions stable across compaction.
pub(crate) struct ScanBuffer {
    data: Vec<u8>,
    start: usize,
    end: usize,
    consumed: u64,
    exhausted: bool,
    pending: Option<ParseError>,
    fatal: bool,
}

impl ScanBuffer {
    /// Allocate a buffer with the given capacity, raised to the minimum
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity.max(MIN_BUFFER_CAPACITY)],
            start: 0,
            end: 0,
            consumed: 0,
            exhausted: false,
            pending: None,
            fatal: false,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Absolute offset of the next unread cell
    pub(crate) fn offset(&self) -> u64 {
        self.consumed + self.start as u64
    }

    /// Number of buffered, not-yet-consumed bytes
    pub(crate) fn buffered_len(&self) -> usize {
        self.end - self.start
    }

    /// True once the source has reported end-of-stream or failed
    pub(crate) fn exhausted(&self) -> bool {
        self.exhausted
    }

    /// The byte `rel` positions past the committed start
    ///
    /// Only valid after `make_readable(rel)` returned true.
    pub(crate) fn byte_at(&self, rel: usize) -> u8 {
        self.data[self.start + rel]
    }

    /// The `len` bytes of the cell at the committed start
    pub(crate) fn cell_bytes(&self, len: usize) -> &[u8] {
        &self.data[self.start..self.start + len]
    }

    /// Guarantee the byte `rel` positions past the committed start is backed
    /// by buffered data or by a definitive no-more-data signal
    ///
    /// Compacts and refills as one operation. Returns false when the source
    /// has no byte at that position: either it is exhausted, or the buffer is
    /// full and the active cell cannot grow further (the caller tells the two
    /// apart via [`exhausted`](Self::exhausted)).
    pub(crate) fn make_readable(&mut self, reader: &mut impl Read, rel: usize) -> bool {
        if self.start + rel < self.end {
            return true;
        }
        self.compact();
        if rel >= self.end {
            self.fill(reader);
        }
        rel < self.end
    }

    /// Slide `[start, end)` to the front, preserving the active cell
    fn compact(&mut self) {
        if self.start == 0 {
            return;
        }
        let len = self.end - self.start;
        self.data.copy_within(self.start..self.end, 0);
        self.consumed += self.start as u64;
        log::trace!(
            "compacted scan buffer: {} bytes retired, {} carried",
            self.start,
            len
        );
        self.start = 0;
        self.end = len;
    }

    /// Read from the source into the free tail until the buffer is full, the
    /// source ends, or a read fails
    ///
    /// A read failure is recorded, not returned: the buffer then behaves as
    /// exhausted so well-formed data already buffered can still be consumed,
    /// and the error is surfaced after iteration stops.
    pub(crate) fn fill(&mut self, reader: &mut impl Read) {
        while !self.exhausted && self.end < self.data.len() {
            match reader.read(&mut self.data[self.end..]) {
                Ok(0) => self.exhausted = true,
                Ok(n) => self.end += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    log::debug!("source read failed, treating as end of stream: {e}");
                    self.record(ParseError::Io(e.to_string()));
                    self.exhausted = true;
                }
            }
        }
    }

    /// Consume `n` bytes from the committed start
    pub(crate) fn commit(&mut self, n: usize) {
        debug_assert!(self.start + n <= self.end);
        self.start += n;
    }

    /// Record an error without marking iteration unusable
    ///
    /// Only the first recorded error is kept.
    pub(crate) fn record(&mut self, err: ParseError) {
        if self.pending.is_none() {
            self.pending = Some(err);
        }
    }

    /// Record a terminal error; no further cell will be classified
    pub(crate) fn record_fatal(&mut self, err: ParseError) {
        log::debug!("recording terminal parse error: {err}");
        self.record(err);
        self.fatal = true;
    }

    /// True once a terminal syntax, capacity, or encoding error was recorded
    pub(crate) fn has_fatal(&self) -> bool {
        self.fatal
    }

    /// The recorded error, if any
    pub(crate) fn pending(&self) -> Option<&ParseError> {
        self.pending.as_ref()
    }
}
