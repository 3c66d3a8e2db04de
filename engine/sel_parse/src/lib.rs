//! Recursive descent parser for CSS3 selector text.
//!
//! [`compile`] is the whole public surface: one synchronous pass that
//! tokenizes the selector, recognizes the grammar, and drives the
//! supplied [`SelectorGenerator`](sel_ir::SelectorGenerator), which
//! owns whatever the compilation produces. Distinct generators turn the
//! identical recognition pass into distinct output types.
//!
//! Compilation is atomic: the first grammar violation aborts with a
//! [`SyntaxError`] and no partial output exists.

mod anb;
mod error;
mod parser;
mod reader;

#[cfg(test)]
mod testutil;

pub use error::{ErrorCode, SyntaxError};
pub use reader::{EndOfStream, Reader};

use sel_ir::SelectorGenerator;

/// Compile selector text by driving `generator` through one grammar
/// recognition pass.
///
/// The generator is taken by value and its output handed back, so a
/// result only exists for a selector that parsed completely.
pub fn compile<G: SelectorGenerator>(
    selector: &str,
    generator: G,
) -> Result<G::Output, SyntaxError> {
    let tokens = sel_lexer::tokenize(selector);
    tracing::trace!(
        selector_len = selector.len(),
        token_count = tokens.len(),
        "compiling selector"
    );
    parser::Parser::new(tokens, generator).run()
}
