//! Syntax errors for selector compilation.
//!
//! A selector compiles atomically: the first token that cannot advance
//! a production aborts the whole compile with a [`SyntaxError`] carrying
//! the offending token's name and position. There is no recovery and no
//! partial result.

use sel_ir::{Span, Token};
use thiserror::Error;

/// Error codes for selector compilation, for searchability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A token that no production at this point accepts.
    UnexpectedToken,
    /// The input ended inside an unfinished production.
    UnexpectedEnd,
    /// `:not(...)` nested inside another `:not(...)`.
    NestedNegation,
    /// A pseudo-class name outside the supported set.
    UnknownPseudoClass,
    /// A malformed `an+b` argument.
    InvalidNth,
}

impl ErrorCode {
    /// The stable `SNNNN` code string.
    pub fn code(self) -> &'static str {
        match self {
            ErrorCode::UnexpectedToken => "S0001",
            ErrorCode::UnexpectedEnd => "S0002",
            ErrorCode::NestedNegation => "S0003",
            ErrorCode::UnknownPseudoClass => "S0004",
            ErrorCode::InvalidNth => "S0005",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A selector that violates the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code}: {message}, found {found} at {span}")]
pub struct SyntaxError {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// What the parser was expecting.
    pub message: String,
    /// Display form of the offending token.
    pub found: String,
    /// Location of the offending token.
    pub span: Span,
}

impl SyntaxError {
    /// Create a syntax error at `token`.
    ///
    /// `#[cold]` keeps the formatting out of the parser's happy path.
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, token: &Token<'_>) -> Self {
        SyntaxError {
            code,
            message: message.into(),
            found: token.kind.to_string(),
            span: token.span,
        }
    }

    /// Create an error for input that ended mid-production.
    #[cold]
    pub fn unexpected_end(message: impl Into<String>, end: Span) -> Self {
        SyntaxError {
            code: ErrorCode::UnexpectedEnd,
            message: message.into(),
            found: "end of input".to_owned(),
            span: end,
        }
    }
}
