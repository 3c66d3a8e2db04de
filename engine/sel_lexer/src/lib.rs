//! Tokenizer for CSS3 selector text.
//!
//! The lexer is total: every input character lands in some token, and
//! characters matching no lexical rule degrade to one-character
//! [`TokenKind::Char`] tokens. Grammar validity is entirely the parser's
//! concern, which keeps lexical analysis context-free.
//!
//! Tokens borrow from the input, so tokenization allocates nothing but
//! the output vector.

mod cursor;
mod scanner;

pub use cursor::Cursor;
pub use scanner::Scanner;

use sel_ir::{Token, TokenKind};

/// Tokenize selector text into a complete token sequence.
///
/// The sequence always ends with exactly one [`TokenKind::Eoi`] token;
/// the scanner keeps yielding `Eoi` if polled past that point.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.kind == TokenKind::Eoi;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
