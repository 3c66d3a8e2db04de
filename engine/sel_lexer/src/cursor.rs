//! Byte cursor over selector text.
//!
//! The cursor advances through the input byte-by-byte and hands back
//! `&str` slices of the original text, so tokens are zero-copy. Reads
//! past the end return `0x00`, which no lexical rule matches, so the
//! scanner's dispatch terminates without per-arm bounds checks.

/// Byte cursor over the selector text.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// The byte at the current position, or `0x00` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.source.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// The byte one position ahead, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.source.as_bytes().get(self.pos + 1).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        self.advance_n(utf8_char_width(self.current()));
    }

    /// True when the input is exhausted.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed tail of the input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Extract a source substring.
    ///
    /// `start..end` must fall on UTF-8 character boundaries, which holds
    /// whenever both offsets were observed at ASCII delimiters.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` accepts the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `quote` or backslash byte and return it.
    /// Returns `0` (leaving the cursor at end of input) if neither occurs.
    ///
    /// Both delimiters are ASCII, so the returned position is always a
    /// character boundary.
    pub fn skip_to_string_delim(&mut self, quote: u8) -> u8 {
        let rest = &self.source.as_bytes()[self.pos.min(self.source.len())..];
        match memchr::memchr2(quote, b'\\', rest) {
            Some(offset) => {
                self.pos += offset;
                self.current()
            }
            None => {
                self.pos = self.source.len();
                0
            }
        }
    }
}

/// Number of bytes in the UTF-8 character starting with `byte`.
#[inline]
fn utf8_char_width(byte: u8) -> usize {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
