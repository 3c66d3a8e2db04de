//! Recursive descent recognizer for the selector grammar.
//!
//! One left-to-right pass with single-token pushback: a production that
//! must inspect a token before committing reads it and unreads it when
//! the alternate production applies. The parser builds nothing itself;
//! it drives a [`SelectorGenerator`] whose callbacks fire in document
//! order, exactly once per grammar event.
//!
//! Grammar:
//!
//! ```text
//! selector_group := selector (',' S* selector)*
//! selector       := sequence (combinator sequence)*
//! combinator     := '+' S* | '>' S* | '~' S* | S+
//! sequence       := (type | universal) simple*  |  simple+
//! type           := [namespace_prefix]? ident
//! universal      := [namespace_prefix]? '*'
//! simple         := id | class | attrib | pseudo
//! attrib         := '[' S* [namespace_prefix]? ident S*
//!                    [ op S* (ident|string) S* ]? ']'
//! op             := '=' | '~=' | '|=' | '^=' | '$=' | '*='
//! pseudo         := ':' [':']? ( ident
//!                    | 'nth-child(' anb ')' | 'nth-last-child(' anb ')'
//!                    | 'not(' sequence ')' )
//! ```
//!
//! The `anb` micro-syntax lives in the `anb` module.

use crate::error::{ErrorCode, SyntaxError};
use crate::reader::Reader;
use sel_ir::{Either, NamespacePrefix, SelectorGenerator, Span, Token, TokenKind};

/// Attribute operator, held between the operator token and the value it
/// applies to.
#[derive(Clone, Copy)]
enum AttrOp {
    Exact,
    Includes,
    DashMatch,
    PrefixMatch,
    SuffixMatch,
    Substring,
}

/// Parser state for one compilation.
pub(crate) struct Parser<'a, G: SelectorGenerator> {
    reader: Reader<Token<'a>>,
    generator: G,
    /// Empty span at the very end of the input, for errors raised once
    /// every token has been consumed.
    end: Span,
}

impl<'a, G: SelectorGenerator> Parser<'a, G> {
    /// Create a parser over an already-tokenized selector.
    pub(crate) fn new(tokens: Vec<Token<'a>>, generator: G) -> Self {
        let end = tokens.last().map(|t| t.span).unwrap_or_default();
        Parser {
            reader: Reader::new(tokens),
            generator,
            end,
        }
    }

    /// Recognize the whole input and yield the generator's output.
    pub(crate) fn run(mut self) -> Result<G::Output, SyntaxError> {
        self.generator.on_init();
        self.selector_group()?;
        self.generator.on_close();
        Ok(self.generator.into_output())
    }

    // ─── Token access ────────────────────────────────────────────────

    pub(crate) fn read(&mut self) -> Result<Token<'a>, SyntaxError> {
        self.reader
            .read()
            .map_err(|_| SyntaxError::unexpected_end("expected more input", self.end))
    }

    pub(crate) fn peek_kind(&self) -> Result<TokenKind<'a>, SyntaxError> {
        self.reader
            .peek()
            .map(|token| token.kind)
            .map_err(|_| SyntaxError::unexpected_end("expected more input", self.end))
    }

    pub(crate) fn unread(&mut self, token: Token<'a>) {
        self.reader.unread(token);
    }

    pub(crate) fn try_read_char(&mut self, ch: char) -> Result<bool, SyntaxError> {
        if self.peek_kind()? == TokenKind::Char(ch) {
            self.read()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub(crate) fn expect_char(&mut self, ch: char) -> Result<(), SyntaxError> {
        let token = self.read()?;
        if token.kind == TokenKind::Char(ch) {
            Ok(())
        } else {
            Err(SyntaxError::new(
                ErrorCode::UnexpectedToken,
                format!("expected '{ch}'"),
                &token,
            ))
        }
    }

    fn expect_ident(&mut self, message: &'static str) -> Result<&'a str, SyntaxError> {
        let token = self.read()?;
        match token.kind {
            TokenKind::Ident(name) => Ok(name),
            _ => Err(SyntaxError::new(ErrorCode::UnexpectedToken, message, &token)),
        }
    }

    /// Consume any run of whitespace tokens.
    pub(crate) fn skip_whitespace(&mut self) -> Result<(), SyntaxError> {
        while matches!(self.peek_kind()?, TokenKind::WhiteSpace(_)) {
            self.read()?;
        }
        Ok(())
    }

    // ─── Grammar ─────────────────────────────────────────────────────

    fn selector_group(&mut self) -> Result<(), SyntaxError> {
        self.selector()?;
        while self.try_read_char(',')? {
            self.skip_whitespace()?;
            self.selector()?;
        }
        let token = self.read()?;
        match token.kind {
            TokenKind::Eoi => Ok(()),
            _ => Err(SyntaxError::new(
                ErrorCode::UnexpectedToken,
                "expected end of selector",
                &token,
            )),
        }
    }

    fn selector(&mut self) -> Result<(), SyntaxError> {
        self.generator.on_selector();
        self.sequence(false)?;
        while self.combinator()? {
            self.sequence(false)?;
        }
        Ok(())
    }

    /// Try to read a combinator between two sequences.
    ///
    /// The lexer already folds whitespace into `+`/`>`/`~` tokens, so a
    /// `WhiteSpace` token here is a descendant combinator, unless what
    /// follows is `,`, `)` or the end, in which case the run is trailing
    /// and combines nothing.
    fn combinator(&mut self) -> Result<bool, SyntaxError> {
        let token = self.read()?;
        match token.kind {
            TokenKind::Plus => {
                self.generator.adjacent();
                self.skip_whitespace()?;
                Ok(true)
            }
            TokenKind::Greater => {
                self.generator.child();
                self.skip_whitespace()?;
                Ok(true)
            }
            TokenKind::Tilde => {
                self.generator.general_sibling();
                self.skip_whitespace()?;
                Ok(true)
            }
            TokenKind::WhiteSpace(_) => match self.peek_kind()? {
                TokenKind::Eoi | TokenKind::Char(',') | TokenKind::Char(')') => Ok(false),
                _ => {
                    self.generator.descendant();
                    Ok(true)
                }
            },
            _ => {
                self.unread(token);
                Ok(false)
            }
        }
    }

    /// A sequence of simple selectors. A type or universal selector may
    /// only open the sequence; at least one simple selector must be
    /// present.
    fn sequence(&mut self, in_not: bool) -> Result<(), SyntaxError> {
        let mut parsed = 0;
        if self.at_type_start()? {
            self.type_or_universal()?;
            parsed += 1;
        }
        loop {
            let token = self.read()?;
            match token.kind {
                TokenKind::Hash(id) => self.generator.id(id),
                TokenKind::Char('.') => {
                    let class = self.expect_ident("expected class name after '.'")?;
                    self.generator.class(class);
                }
                TokenKind::Char('[') => self.attribute()?,
                TokenKind::Char(':') => self.pseudo()?,
                TokenKind::Not => {
                    if in_not {
                        return Err(SyntaxError::new(
                            ErrorCode::NestedNegation,
                            "':not(' cannot be nested",
                            &token,
                        ));
                    }
                    self.negation()?;
                }
                _ => {
                    self.unread(token);
                    break;
                }
            }
            parsed += 1;
        }
        if parsed == 0 {
            let token = self.read()?;
            return Err(SyntaxError::new(
                ErrorCode::UnexpectedToken,
                "expected a simple selector",
                &token,
            ));
        }
        Ok(())
    }

    fn at_type_start(&self) -> Result<bool, SyntaxError> {
        Ok(matches!(
            self.peek_kind()?,
            TokenKind::Ident(_) | TokenKind::Char('*') | TokenKind::Char('|')
        ))
    }

    fn type_or_universal(&mut self) -> Result<(), SyntaxError> {
        let prefix = self.namespace_prefix()?;
        let token = self.read()?;
        match token.kind {
            TokenKind::Ident(name) => self.generator.type_selector(prefix, name),
            TokenKind::Char('*') => self.generator.universal(prefix),
            _ => {
                return Err(SyntaxError::new(
                    ErrorCode::UnexpectedToken,
                    "expected element name or '*'",
                    &token,
                ))
            }
        }
        Ok(())
    }

    /// Optional namespace qualifier before a name: `|name`, `*|name`,
    /// `prefix|name`, or nothing. Reads ahead and unreads when the
    /// qualifier production does not apply.
    fn namespace_prefix(&mut self) -> Result<NamespacePrefix<'a>, SyntaxError> {
        let token = self.read()?;
        match token.kind {
            TokenKind::Char('|') => Ok(NamespacePrefix::Empty),
            TokenKind::Ident(name) => {
                if self.try_read_char('|')? {
                    Ok(NamespacePrefix::Specific(name))
                } else {
                    self.unread(token);
                    Ok(NamespacePrefix::None)
                }
            }
            TokenKind::Char('*') => {
                if self.try_read_char('|')? {
                    Ok(NamespacePrefix::Any)
                } else {
                    self.unread(token);
                    Ok(NamespacePrefix::None)
                }
            }
            _ => {
                self.unread(token);
                Ok(NamespacePrefix::None)
            }
        }
    }

    /// An attribute selector; the opening `[` has been consumed.
    fn attribute(&mut self) -> Result<(), SyntaxError> {
        self.skip_whitespace()?;
        let prefix = self.namespace_prefix()?;
        let name = self.expect_ident("expected attribute name")?;
        self.skip_whitespace()?;
        let token = self.read()?;
        let op = match token.kind {
            TokenKind::Char(']') => {
                self.generator.attribute_exists(prefix, name);
                return Ok(());
            }
            TokenKind::Char('=') => AttrOp::Exact,
            TokenKind::Includes => AttrOp::Includes,
            TokenKind::DashMatch => AttrOp::DashMatch,
            TokenKind::PrefixMatch => AttrOp::PrefixMatch,
            TokenKind::SuffixMatch => AttrOp::SuffixMatch,
            TokenKind::SubstringMatch => AttrOp::Substring,
            _ => {
                return Err(SyntaxError::new(
                    ErrorCode::UnexpectedToken,
                    "expected ']' or an attribute operator",
                    &token,
                ))
            }
        };
        self.skip_whitespace()?;
        let token = self.read()?;
        let value: Either<&'a str, &'a str> = match token.kind {
            TokenKind::Ident(text) => Either::A(text),
            TokenKind::String(text) => Either::B(text),
            _ => {
                return Err(SyntaxError::new(
                    ErrorCode::UnexpectedToken,
                    "expected attribute value",
                    &token,
                ))
            }
        };
        self.skip_whitespace()?;
        self.expect_char(']')?;
        // An unquoted identifier and a quoted string carry the same
        // information once parsed.
        let value = value.fold(|ident| ident, |string| string);
        match op {
            AttrOp::Exact => self.generator.attribute_exact(prefix, name, value),
            AttrOp::Includes => self.generator.attribute_includes(prefix, name, value),
            AttrOp::DashMatch => self.generator.attribute_dash_match(prefix, name, value),
            AttrOp::PrefixMatch => self.generator.attribute_prefix_match(prefix, name, value),
            AttrOp::SuffixMatch => self.generator.attribute_suffix_match(prefix, name, value),
            AttrOp::Substring => self.generator.attribute_substring(prefix, name, value),
        }
        Ok(())
    }

    /// A pseudo-class; the opening `:` has been consumed. A doubled
    /// colon (pseudo-element syntax) changes nothing the generator sees.
    fn pseudo(&mut self) -> Result<(), SyntaxError> {
        let _ = self.try_read_char(':')?;
        let token = self.read()?;
        match token.kind {
            TokenKind::Ident(name) => self.pseudo_class(&token, name),
            TokenKind::Function(name) => self.functional_pseudo(&token, name),
            _ => Err(SyntaxError::new(
                ErrorCode::UnexpectedToken,
                "expected pseudo-class name",
                &token,
            )),
        }
    }

    fn pseudo_class(&mut self, token: &Token<'a>, name: &str) -> Result<(), SyntaxError> {
        if name.eq_ignore_ascii_case("first-child") {
            self.generator.first_child();
        } else if name.eq_ignore_ascii_case("last-child") {
            self.generator.last_child();
        } else if name.eq_ignore_ascii_case("only-child") {
            self.generator.only_child();
        } else if name.eq_ignore_ascii_case("empty") {
            self.generator.empty();
        } else {
            return Err(SyntaxError::new(
                ErrorCode::UnknownPseudoClass,
                format!("unsupported pseudo-class ':{name}'"),
                token,
            ));
        }
        Ok(())
    }

    fn functional_pseudo(&mut self, token: &Token<'a>, name: &str) -> Result<(), SyntaxError> {
        self.skip_whitespace()?;
        if name.eq_ignore_ascii_case("nth-child") {
            let (a, b) = self.nth_expression()?;
            self.generator.nth_child(a, b);
        } else if name.eq_ignore_ascii_case("nth-last-child") {
            let (a, b) = self.nth_expression()?;
            self.generator.nth_last_child(a, b);
        } else {
            return Err(SyntaxError::new(
                ErrorCode::UnknownPseudoClass,
                format!("unsupported pseudo-class ':{name}('"),
                token,
            ));
        }
        Ok(())
    }

    /// The body of `:not(...)`: one nested sequence, no deeper negation.
    fn negation(&mut self) -> Result<(), SyntaxError> {
        self.skip_whitespace()?;
        self.sequence(true)?;
        self.skip_whitespace()?;
        self.expect_char(')')
    }
}
