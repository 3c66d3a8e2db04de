//! Token types for the selector lexer.
//!
//! A token pairs a [`TokenKind`] with the [`Span`] it was scanned from.
//! Kinds that carry text hold it in the variant payload, so a token that
//! requires text cannot be constructed without it. Payloads borrow from
//! the selector source.

use super::Span;
use std::fmt;

/// A token with its span in the selector text.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: Span,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind<'a>, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for the CSS3 selector grammar.
///
/// The set is closed: any input character that matches no lexical rule
/// degrades to a one-character [`TokenKind::Char`], so the lexer is total
/// and rejection happens in the parser.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind<'a> {
    /// End of input. Scanned exactly once per selector, always last.
    Eoi,
    /// `{ident}`: an identifier such as an element or attribute name.
    Ident(&'a str),
    /// `"#" {name}`: an ID selector hash.
    Hash(&'a str),
    /// `~=`: the includes attribute operator.
    Includes,
    /// `|=`: the dash-match attribute operator.
    DashMatch,
    /// `^=`: the prefix-match attribute operator.
    PrefixMatch,
    /// `$=`: the suffix-match attribute operator.
    SuffixMatch,
    /// `*=`: the substring-match attribute operator.
    SubstringMatch,
    /// A quoted string. The payload is the raw content between the
    /// quotes and may be empty.
    String(&'a str),
    /// `S* "+"`: adjacent-sibling combinator (absorbs leading whitespace).
    Plus,
    /// `S* ">"`: child combinator (absorbs leading whitespace).
    Greater,
    /// `[ \t\r\n\f]+`: a whitespace run, one token per run.
    WhiteSpace(&'a str),
    /// `{ident} "("`: a functional pseudo-class opener.
    Function(&'a str),
    /// `":" {N}{O}{T} "("`: the negation opener, matched case-insensitively.
    Not,
    /// `[0-9]+`: an unsigned integer run.
    Integer(&'a str),
    /// `S* "~"`: general-sibling combinator (absorbs leading whitespace).
    Tilde,
    /// Any character matching no other rule.
    Char(char),
}

impl TokenKind<'_> {
    /// Human-readable name of the kind, without its payload.
    ///
    /// Used in diagnostics ("expected identifier, found end of input").
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Eoi => "end of input",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Hash(_) => "ID hash",
            TokenKind::Includes => "'~='",
            TokenKind::DashMatch => "'|='",
            TokenKind::PrefixMatch => "'^='",
            TokenKind::SuffixMatch => "'$='",
            TokenKind::SubstringMatch => "'*='",
            TokenKind::String(_) => "string",
            TokenKind::Plus => "'+'",
            TokenKind::Greater => "'>'",
            TokenKind::WhiteSpace(_) => "whitespace",
            TokenKind::Function(_) => "function",
            TokenKind::Not => "':not('",
            TokenKind::Integer(_) => "integer",
            TokenKind::Tilde => "'~'",
            TokenKind::Char(_) => "character",
        }
    }
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(text) => write!(f, "identifier '{text}'"),
            TokenKind::Hash(name) => write!(f, "ID hash '#{name}'"),
            TokenKind::String(text) => write!(f, "string '{text}'"),
            TokenKind::Function(name) => write!(f, "function '{name}('"),
            TokenKind::Integer(digits) => write!(f, "integer '{digits}'"),
            TokenKind::Char(ch) => write!(f, "'{ch}'"),
            _ => f.write_str(self.display_name()),
        }
    }
}
