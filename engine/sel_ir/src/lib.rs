//! Core types for the sel selector engine.
//!
//! This crate contains the data structures shared by the lexer, the parser,
//! and every output back end:
//! - [`Span`] for source locations
//! - [`Token`] and [`TokenKind`] for lexer output
//! - [`NamespacePrefix`] for namespace-qualified names
//! - [`Either`] for two-alternative grammar positions
//! - [`SelectorGenerator`], the visitor contract the parser drives
//!
//! Tokens borrow from the selector text, so the whole front end is
//! zero-copy: a token's payload is a slice of the input it was scanned
//! from.

mod either;
mod generator;
mod prefix;
mod span;
mod token;

pub use either::Either;
pub use generator::SelectorGenerator;
pub use prefix::NamespacePrefix;
pub use span::Span;
pub use token::{Token, TokenKind};
