//! Hand-written scanner producing selector tokens.
//!
//! Dispatch is over the current byte; each arm is one focused method
//! that advances the cursor and returns a finished token. Context the
//! grammar needs later is resolved here, at the character level:
//!
//! - an identifier immediately followed by `(` becomes a `Function`
//!   token (the paren is consumed);
//! - the sequence `:not(`, matched case-insensitively, becomes the
//!   single `Not` token;
//! - a whitespace run immediately followed by `+`, `>` or `~` is
//!   absorbed into that combinator token and no `WhiteSpace` token is
//!   emitted; when the `~` opens a `~=` operator instead, which is not
//!   a combinator, the run stays a `WhiteSpace` token.
//!
//! Anything matching no rule degrades to a one-character `Char` token;
//! the scanner never fails.

use crate::cursor::Cursor;
use sel_ir::{Span, Token, TokenKind};

/// Whitespace per the selector grammar: space, tab, CR, LF, form feed.
#[inline]
fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n' | b'\x0c')
}

/// First character of an identifier.
#[inline]
fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Continuation character of an identifier or hash name.
#[inline]
fn is_name_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

/// One-token-at-a-time scanner over selector text.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(source),
        }
    }

    /// Produce the next token.
    ///
    /// Returns `Eoi` when the source is exhausted; further calls keep
    /// returning `Eoi` at the same position.
    pub fn next_token(&mut self) -> Token<'a> {
        if self.cursor.is_eof() {
            let end = self.cursor.pos();
            return Token::new(TokenKind::Eoi, Span::from_range(end..end));
        }
        let start = self.cursor.pos();
        match self.cursor.current() {
            b if is_whitespace(b) => self.whitespace(start),
            b if is_name_start(b) => self.ident(start),
            b'-' => self.dash(start),
            b'0'..=b'9' => self.integer(start),
            b'#' => self.hash(start),
            b'"' | b'\'' => self.string(start),
            b':' => self.colon(start),
            b'~' => self.two_char_op(start, TokenKind::Includes, TokenKind::Tilde),
            b'+' => self.single(start, TokenKind::Plus),
            b'>' => self.single(start, TokenKind::Greater),
            b'|' => self.op_or_char(start, TokenKind::DashMatch),
            b'^' => self.op_or_char(start, TokenKind::PrefixMatch),
            b'$' => self.op_or_char(start, TokenKind::SuffixMatch),
            b'*' => self.op_or_char(start, TokenKind::SubstringMatch),
            _ => self.char_token(start),
        }
    }

    fn span(&self, start: usize) -> Span {
        Span::from_range(start..self.cursor.pos())
    }

    fn single(&mut self, start: usize, kind: TokenKind<'a>) -> Token<'a> {
        self.cursor.advance();
        Token::new(kind, self.span(start))
    }

    /// A whitespace run. One `WhiteSpace` token per run, unless the run
    /// immediately precedes a combinator, which absorbs it.
    fn whitespace(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(is_whitespace);
        match self.cursor.current() {
            b'+' => self.single(start, TokenKind::Plus),
            b'>' => self.single(start, TokenKind::Greater),
            // `~=` is an attribute operator, not the combinator; leave
            // the run as whitespace and rescan the operator next call.
            b'~' if self.cursor.peek() != b'=' => self.single(start, TokenKind::Tilde),
            _ => {
                let run = self.cursor.slice(start, self.cursor.pos());
                Token::new(TokenKind::WhiteSpace(run), self.span(start))
            }
        }
    }

    /// An identifier, or a `Function` token when `(` follows directly.
    fn ident(&mut self, start: usize) -> Token<'a> {
        self.cursor.advance();
        self.cursor.eat_while(is_name_char);
        let name = self.cursor.slice_from(start);
        if self.cursor.current() == b'(' {
            self.cursor.advance();
            return Token::new(TokenKind::Function(name), self.span(start));
        }
        Token::new(TokenKind::Ident(name), self.span(start))
    }

    /// `-` starts an identifier only when a name-start character
    /// follows (`-n`); otherwise it degrades to a `Char` token.
    fn dash(&mut self, start: usize) -> Token<'a> {
        if is_name_start(self.cursor.peek()) {
            self.ident(start)
        } else {
            self.char_token(start)
        }
    }

    fn integer(&mut self, start: usize) -> Token<'a> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        Token::new(TokenKind::Integer(self.cursor.slice_from(start)), self.span(start))
    }

    /// `#name`. A `#` with no name character after it degrades to a
    /// `Char` token.
    fn hash(&mut self, start: usize) -> Token<'a> {
        if !is_name_char(self.cursor.peek()) {
            return self.char_token(start);
        }
        self.cursor.advance();
        let name_start = self.cursor.pos();
        self.cursor.eat_while(is_name_char);
        Token::new(
            TokenKind::Hash(self.cursor.slice_from(name_start)),
            self.span(start),
        )
    }

    /// A quoted string. The payload is the raw content between the
    /// quotes; a backslash escapes the following character. An
    /// unterminated string takes the rest of the input.
    fn string(&mut self, start: usize) -> Token<'a> {
        let quote = self.cursor.current();
        self.cursor.advance();
        let content_start = self.cursor.pos();
        loop {
            match self.cursor.skip_to_string_delim(quote) {
                0 => break,
                b'\\' => {
                    self.cursor.advance();
                    if !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                _ => break,
            }
        }
        let content = self.cursor.slice(content_start, self.cursor.pos());
        if !self.cursor.is_eof() {
            self.cursor.advance();
        }
        Token::new(TokenKind::String(content), self.span(start))
    }

    /// `:not(` (case-insensitive) as one token; any other `:` is a
    /// plain `Char` token and the parser assembles the pseudo-class.
    fn colon(&mut self, start: usize) -> Token<'a> {
        let rest = self.cursor.rest().as_bytes();
        if rest.len() >= 5 && rest[1..5].eq_ignore_ascii_case(b"not(") {
            self.cursor.advance_n(5);
            return Token::new(TokenKind::Not, self.span(start));
        }
        self.char_token(start)
    }

    /// A two-character `<op>=` operator, or the fallback kind when `=`
    /// does not follow.
    fn two_char_op(&mut self, start: usize, with_eq: TokenKind<'a>, without: TokenKind<'a>) -> Token<'a> {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            Token::new(with_eq, self.span(start))
        } else {
            self.single(start, without)
        }
    }

    /// A two-character `<op>=` operator, or a `Char` token for the bare
    /// character.
    fn op_or_char(&mut self, start: usize, with_eq: TokenKind<'a>) -> Token<'a> {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            Token::new(with_eq, self.span(start))
        } else {
            self.char_token(start)
        }
    }

    /// The total-coverage fallback: one character, whatever it is.
    fn char_token(&mut self, start: usize) -> Token<'a> {
        let Some(ch) = self.cursor.rest().chars().next() else {
            let end = self.cursor.pos();
            return Token::new(TokenKind::Eoi, Span::from_range(end..end));
        };
        self.cursor.advance_n(ch.len_utf8());
        Token::new(TokenKind::Char(ch), self.span(start))
    }
}

#[cfg(test)]
mod tests;
