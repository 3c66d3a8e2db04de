//! Pushback reader over a materialized buffer.
//!
//! The parser needs unbounded one-value-at-a-time lookahead: several
//! productions read a token, inspect it, and push it back when the
//! alternate production applies. Tokenization is eager, so the reader
//! is a cursor into a buffer plus a pushback stack rather than a
//! one-ahead cache over a lazy source; the observable behavior is the
//! same and ownership handles the buffer's release on drop.

use smallvec::SmallVec;
use thiserror::Error;

/// State error: reading or peeking with nothing pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no value pending in the reader")]
pub struct EndOfStream;

/// Cursor over a buffer of values with pushback.
///
/// Pushed-back values are returned most-recent-first, before any
/// remaining buffer values.
#[derive(Debug)]
pub struct Reader<T> {
    buffer: Vec<T>,
    pos: usize,
    /// Pushback stack; the live depth is almost always 0 or 1.
    pushback: SmallVec<[T; 2]>,
}

impl<T> Reader<T> {
    /// Create a reader owning `buffer`.
    pub fn new(buffer: Vec<T>) -> Self {
        Reader {
            buffer,
            pos: 0,
            pushback: SmallVec::new(),
        }
    }

    /// True while at least one value is waiting to be read.
    #[inline]
    pub fn has_more(&self) -> bool {
        !self.pushback.is_empty() || self.pos < self.buffer.len()
    }

    /// The next pending value, without consuming it.
    pub fn peek(&self) -> Result<&T, EndOfStream> {
        if let Some(value) = self.pushback.last() {
            return Ok(value);
        }
        self.buffer.get(self.pos).ok_or(EndOfStream)
    }

    /// Push `value` back; the next read returns it first. Repeated
    /// pushbacks stack, most-recent-first.
    pub fn unread(&mut self, value: T) {
        self.pushback.push(value);
    }
}

impl<T: Clone> Reader<T> {
    /// Consume and return the next pending value.
    pub fn read(&mut self) -> Result<T, EndOfStream> {
        if let Some(value) = self.pushback.pop() {
            return Ok(value);
        }
        let value = self.buffer.get(self.pos).cloned().ok_or(EndOfStream)?;
        self.pos += 1;
        Ok(value)
    }
}
