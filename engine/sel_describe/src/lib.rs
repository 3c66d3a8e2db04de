//! Human-readable descriptions of selectors.
//!
//! [`HumanReadable`] is the reference [`SelectorGenerator`]: it turns
//! the parser's callback stream into an English sentence describing
//! which elements the selector takes. It exists both as a usable back
//! end and as the demonstration that grammar recognition is decoupled
//! from output generation.

use sel_ir::{NamespacePrefix, SelectorGenerator};
use sel_parse::SyntaxError;

/// Describe `selector` in English.
///
/// ```
/// let text = sel_describe::describe("div.note").unwrap();
/// assert_eq!(
///     text,
///     "Take all <div> elements with a class of 'note' and select them."
/// );
/// ```
pub fn describe(selector: &str) -> Result<String, SyntaxError> {
    sel_parse::compile(selector, HumanReadable::default())
}

/// Generator producing an English description of the selector.
///
/// Phrases accumulate in document order as the parser reports each
/// grammar event. Each selector in a group opens with "Take all" (the
/// first) or a "Combined with previous" connective (the rest); closing
/// trims stray whitespace and appends the final "and select them."
#[derive(Default)]
pub struct HumanReadable {
    text: String,
    /// Flips after the first descendant combinator; later descendant
    /// steps in the chain use the alternate connective.
    chained: bool,
}

impl HumanReadable {
    /// Create a generator with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, phrase: &str) {
        self.text.push_str(phrase);
    }
}

impl SelectorGenerator for HumanReadable {
    type Output = String;

    fn on_init(&mut self) {
        self.text.clear();
    }

    fn on_selector(&mut self) {
        if self.text.is_empty() {
            self.add("Take all");
        } else {
            self.add(" and select them. Combined with previous, take all");
        }
    }

    fn on_close(&mut self) {
        let mut text = self.text.trim().to_owned();
        text.push_str(" and select them.");
        self.text = text;
    }

    fn into_output(self) -> String {
        self.text
    }

    fn type_selector(&mut self, _prefix: NamespacePrefix<'_>, name: &str) {
        self.add(&format!(" <{name}> elements"));
    }

    fn universal(&mut self, _prefix: NamespacePrefix<'_>) {
        self.add(" elements");
    }

    fn id(&mut self, id: &str) {
        self.add(&format!(" with an ID of '{id}'"));
    }

    fn class(&mut self, class: &str) {
        self.add(&format!(" with a class of '{class}'"));
    }

    fn attribute_exists(&mut self, _prefix: NamespacePrefix<'_>, name: &str) {
        self.add(&format!(" which have attribute {name} defined"));
    }

    fn attribute_exact(&mut self, _prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.add(&format!(" which have attribute {name} with a value of '{value}'"));
    }

    fn attribute_includes(&mut self, _prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.add(&format!(
            " which have attribute {name} that includes the word '{value}'"
        ));
    }

    fn attribute_dash_match(&mut self, _prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.add(&format!(
            " which have attribute {name} with a hyphen separated value matching '{value}'"
        ));
    }

    fn attribute_prefix_match(&mut self, _prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.add(&format!(
            " which have attribute {name} whose value begins with '{value}'"
        ));
    }

    fn attribute_suffix_match(&mut self, _prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.add(&format!(
            " which have attribute {name} whose value ends with '{value}'"
        ));
    }

    fn attribute_substring(&mut self, _prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.add(&format!(
            " which have attribute {name} whose value contains '{value}'"
        ));
    }

    fn first_child(&mut self) {
        self.add(" which are the first child of their parent");
    }

    fn last_child(&mut self) {
        self.add(" which are the last child of their parent");
    }

    fn nth_child(&mut self, a: i32, b: i32) {
        self.add(&format!(" where the element has {a}n+{b}-1 sibling before it"));
    }

    fn nth_last_child(&mut self, a: i32, b: i32) {
        self.add(&format!(" where the element has {a}n+{b}-1 sibling after it"));
    }

    fn only_child(&mut self) {
        self.add(" where the element is the only child");
    }

    fn empty(&mut self) {
        self.add(" where the element is empty");
    }

    fn child(&mut self) {
        self.add(", then take their immediate children which are");
    }

    fn descendant(&mut self) {
        if self.chained {
            self.add(". With those, take only their descendants which are");
        } else {
            self.add(", then take their descendants which are");
            self.chained = true;
        }
    }

    fn adjacent(&mut self) {
        self.add(", then take their immediate siblings which are");
    }

    fn general_sibling(&mut self) {
        self.add(", then take their siblings which are");
    }
}
