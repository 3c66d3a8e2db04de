//! The output-generation contract the parser drives.

use super::NamespacePrefix;

/// Visitor for one selector compilation.
///
/// The parser recognizes the grammar and calls these methods in document
/// order; the generator accumulates whatever output it is building. The
/// same recognition pass therefore serves any back end (an English
/// description, an executable matcher) without the grammar being
/// duplicated.
///
/// # Lifecycle
///
/// `on_init` fires once before any token is consumed, `on_selector`
/// immediately before each selector in the group, then exactly one
/// simple-selector method per simple selector and exactly one combinator
/// method between the two sequences it joins. `on_close` fires once,
/// only after the whole input has been consumed. The parser takes the
/// generator by value and hands back [`Self::Output`] via
/// [`into_output`](Self::into_output), so a result can only be observed
/// after a completed pass.
///
/// Implementations may keep arbitrary mutable state between calls. A
/// generator instance serves one compilation; reuse without a fresh
/// `on_init` is unspecified.
///
/// All arguments arrive fully parsed: names and values as plain string
/// slices, `an+b` arguments as an `(a, b)` pair, namespaces as
/// [`NamespacePrefix`]. Raw tokens never cross this boundary.
pub trait SelectorGenerator {
    /// The back-end-specific compilation result.
    type Output;

    /// Called once, before any token is consumed.
    fn on_init(&mut self);

    /// Called immediately before each selector's first sequence.
    fn on_selector(&mut self);

    /// Called once, after the input is fully consumed.
    fn on_close(&mut self);

    /// Consume the generator and yield the accumulated output.
    fn into_output(self) -> Self::Output
    where
        Self: Sized;

    /// A type selector, e.g. `div`.
    fn type_selector(&mut self, prefix: NamespacePrefix<'_>, name: &str);

    /// The universal selector, `*`.
    fn universal(&mut self, prefix: NamespacePrefix<'_>);

    /// An ID selector, e.g. `#main`.
    fn id(&mut self, id: &str);

    /// A class selector, e.g. `.note`.
    fn class(&mut self, class: &str);

    /// `[name]`: attribute presence.
    fn attribute_exists(&mut self, prefix: NamespacePrefix<'_>, name: &str);

    /// `[name=value]`: exact attribute value.
    fn attribute_exact(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str);

    /// `[name~=value]`: value appears in the space-separated word list.
    fn attribute_includes(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str);

    /// `[name|=value]`: value matches the hyphen-separated head.
    fn attribute_dash_match(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str);

    /// `[name^=value]`: attribute value begins with `value`.
    fn attribute_prefix_match(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str);

    /// `[name$=value]`: attribute value ends with `value`.
    fn attribute_suffix_match(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str);

    /// `[name*=value]`: attribute value contains `value`.
    fn attribute_substring(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str);

    /// `:first-child`.
    fn first_child(&mut self);

    /// `:last-child`.
    fn last_child(&mut self);

    /// `:nth-child(an+b)`. The pair arrives uninterpreted.
    fn nth_child(&mut self, a: i32, b: i32);

    /// `:nth-last-child(an+b)`. The pair arrives uninterpreted.
    fn nth_last_child(&mut self, a: i32, b: i32);

    /// `:only-child`.
    fn only_child(&mut self);

    /// `:empty`.
    fn empty(&mut self);

    /// The `>` child combinator.
    fn child(&mut self);

    /// The descendant combinator (bare whitespace).
    fn descendant(&mut self);

    /// The `+` adjacent-sibling combinator.
    fn adjacent(&mut self);

    /// The `~` general-sibling combinator.
    fn general_sibling(&mut self);
}
