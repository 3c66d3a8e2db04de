//! The `an+b` micro-syntax for structural pseudo-classes.
//!
//! Extends [`Parser`] with the argument grammar of `nth-child(...)` and
//! `nth-last-child(...)`: the keyword forms `odd` (2n+1) and `even`
//! (2n+0) first, then the numeric form with an optional sign, optional
//! coefficient, optional literal `n`, and optional signed offset.
//!
//! The lexer has no sign or `n` concept, so the pieces arrive in a
//! handful of token shapes:
//!
//! - `odd`, `even`, `n`, `-n`, `n-1`: single identifier tokens
//! - `2n+1`: integer, identifier, `+`, integer
//! - `2n-1`: integer, then the fused identifier `n-1`
//! - `3`, `+3`, `-3`: an optionally signed integer (a bare offset)
//!
//! The parsed `(a, b)` pair passes to the generator uninterpreted.

use crate::error::{ErrorCode, SyntaxError};
use crate::parser::Parser;
use sel_ir::{SelectorGenerator, Token, TokenKind};

impl<'a, G: SelectorGenerator> Parser<'a, G> {
    /// Parse an `an+b` argument and the closing `)`.
    ///
    /// Leading whitespace has already been consumed.
    pub(crate) fn nth_expression(&mut self) -> Result<(i32, i32), SyntaxError> {
        let token = self.read()?;
        let pair = match token.kind {
            TokenKind::Ident(text) if text.eq_ignore_ascii_case("odd") => (2, 1),
            TokenKind::Ident(text) if text.eq_ignore_ascii_case("even") => (2, 0),
            TokenKind::Ident(text) => self.nth_ident(&token, text)?,
            TokenKind::Integer(digits) => self.nth_number(&token, digits, 1)?,
            TokenKind::Plus => {
                let next = self.read()?;
                match next.kind {
                    TokenKind::Integer(digits) => self.nth_number(&next, digits, 1)?,
                    // `+n...`; a sign of its own is already in the identifier
                    // for the negative form, so reject `+-n` shapes here.
                    TokenKind::Ident(text) if !text.starts_with('-') => {
                        self.nth_ident(&next, text)?
                    }
                    _ => return Err(invalid_nth(&next)),
                }
            }
            TokenKind::Char('-') => {
                let next = self.read()?;
                match next.kind {
                    TokenKind::Integer(digits) => self.nth_number(&next, digits, -1)?,
                    _ => return Err(invalid_nth(&next)),
                }
            }
            _ => return Err(invalid_nth(&token)),
        };
        self.skip_whitespace()?;
        self.expect_char(')')?;
        Ok(pair)
    }

    /// Identifier-led form: `n`, `-n`, `n-1`, and case variants.
    /// The coefficient is implicitly ±1.
    fn nth_ident(&mut self, token: &Token<'a>, text: &str) -> Result<(i32, i32), SyntaxError> {
        let (a, rest) = match text.strip_prefix('-') {
            Some(stripped) => (-1, stripped),
            None => (1, text),
        };
        let Some(after_n) = strip_n(rest) else {
            return Err(invalid_nth(token));
        };
        let b = self.nth_offset(token, after_n)?;
        Ok((a, b))
    }

    /// Number-led form: a bare offset, or a coefficient when an
    /// `n`-identifier follows directly.
    fn nth_number(
        &mut self,
        token: &Token<'a>,
        digits: &str,
        sign: i32,
    ) -> Result<(i32, i32), SyntaxError> {
        let value = sign * parse_int(digits).ok_or_else(|| invalid_nth(token))?;
        if let TokenKind::Ident(text) = self.peek_kind()? {
            if let Some(after_n) = strip_n(text) {
                let ident = self.read()?;
                let b = self.nth_offset(&ident, after_n)?;
                return Ok((value, b));
            }
        }
        Ok((0, value))
    }

    /// The signed offset after `n`: fused into the identifier (`n-1`),
    /// split across following tokens (`n - 1`), or absent.
    fn nth_offset(&mut self, token: &Token<'a>, after_n: &str) -> Result<i32, SyntaxError> {
        if after_n.is_empty() {
            return self.nth_trailing_offset();
        }
        if let Some(digits) = after_n.strip_prefix('-') {
            // `n-` with the digits in a following token
            if digits.is_empty() {
                return self.nth_offset_int(-1);
            }
            if digits.bytes().all(|b| b.is_ascii_digit()) {
                return parse_int(digits)
                    .map(|v| -v)
                    .ok_or_else(|| invalid_nth(token));
            }
        }
        Err(invalid_nth(token))
    }

    /// An offset carried by separate tokens: `+ 1`, `- 1`, or nothing.
    fn nth_trailing_offset(&mut self) -> Result<i32, SyntaxError> {
        self.skip_whitespace()?;
        match self.peek_kind()? {
            TokenKind::Plus => {
                self.read()?;
                self.nth_offset_int(1)
            }
            TokenKind::Char('-') => {
                self.read()?;
                self.nth_offset_int(-1)
            }
            _ => Ok(0),
        }
    }

    /// The integer part of a signed offset.
    fn nth_offset_int(&mut self, sign: i32) -> Result<i32, SyntaxError> {
        self.skip_whitespace()?;
        let token = self.read()?;
        match token.kind {
            TokenKind::Integer(digits) => parse_int(digits)
                .map(|v| sign * v)
                .ok_or_else(|| invalid_nth(&token)),
            _ => Err(invalid_nth(&token)),
        }
    }
}

/// Strip a leading `n` or `N` from an identifier.
fn strip_n(text: &str) -> Option<&str> {
    text.strip_prefix('n').or_else(|| text.strip_prefix('N'))
}

/// Parse a digit run, rejecting values that overflow `i32`.
fn parse_int(digits: &str) -> Option<i32> {
    digits.parse().ok()
}

#[cold]
fn invalid_nth(token: &Token<'_>) -> SyntaxError {
    SyntaxError::new(
        ErrorCode::InvalidNth,
        "expected an 'an+b' argument",
        token,
    )
}
