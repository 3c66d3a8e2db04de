//! Namespace prefixes for type, universal, and attribute selectors.

use std::fmt;

/// The namespace qualifier attached to an element or attribute name.
///
/// Exactly one shape holds for any value, by construction:
///
/// - [`None`](NamespacePrefix::None): no prefix was written; the name
///   matches the default namespace if one is in effect, any otherwise.
/// - [`Any`](NamespacePrefix::Any): written `*|name`; matches every
///   namespace, including none.
/// - [`Empty`](NamespacePrefix::Empty): written `|name`; matches only
///   names without a namespace.
/// - [`Specific`](NamespacePrefix::Specific): written `prefix|name`;
///   matches the namespace bound to `prefix`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
pub enum NamespacePrefix<'a> {
    #[default]
    None,
    Any,
    Empty,
    Specific(&'a str),
}

impl<'a> NamespacePrefix<'a> {
    /// True when no prefix was written.
    pub fn is_none(&self) -> bool {
        matches!(self, NamespacePrefix::None)
    }

    /// True for the `*|` any-namespace prefix.
    pub fn is_any(&self) -> bool {
        matches!(self, NamespacePrefix::Any)
    }

    /// True for the `|` empty-namespace prefix.
    pub fn is_empty(&self) -> bool {
        matches!(self, NamespacePrefix::Empty)
    }

    /// True for a named prefix.
    pub fn is_specific(&self) -> bool {
        matches!(self, NamespacePrefix::Specific(_))
    }

    /// The prefix text as written, if any was.
    pub fn text(&self) -> Option<&'a str> {
        match self {
            NamespacePrefix::None => None,
            NamespacePrefix::Any => Some("*"),
            NamespacePrefix::Empty => Some(""),
            NamespacePrefix::Specific(text) => Some(*text),
        }
    }

    /// Format this prefix together with a name.
    ///
    /// A bare name for [`None`](NamespacePrefix::None), `prefix|name`
    /// otherwise.
    pub fn format(&self, name: &str) -> String {
        match self.text() {
            None => name.to_owned(),
            Some(prefix) => format!("{prefix}|{name}"),
        }
    }
}

impl fmt::Display for NamespacePrefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.text() {
            None => f.write_str("(none)"),
            Some(text) => f.write_str(text),
        }
    }
}
