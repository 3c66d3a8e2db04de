//! Test support: a generator that records every callback it receives.

use sel_ir::{NamespacePrefix, SelectorGenerator};

/// Records the callback sequence as readable strings, one per event.
#[derive(Default)]
pub struct Recorder {
    events: Vec<String>,
}

impl SelectorGenerator for Recorder {
    type Output = Vec<String>;

    fn on_init(&mut self) {
        self.events.push("init".to_owned());
    }

    fn on_selector(&mut self) {
        self.events.push("selector".to_owned());
    }

    fn on_close(&mut self) {
        self.events.push("close".to_owned());
    }

    fn into_output(self) -> Vec<String> {
        self.events
    }

    fn type_selector(&mut self, prefix: NamespacePrefix<'_>, name: &str) {
        self.events.push(format!("type({})", prefix.format(name)));
    }

    fn universal(&mut self, prefix: NamespacePrefix<'_>) {
        self.events.push(format!("universal({})", prefix.format("*")));
    }

    fn id(&mut self, id: &str) {
        self.events.push(format!("id({id})"));
    }

    fn class(&mut self, class: &str) {
        self.events.push(format!("class({class})"));
    }

    fn attribute_exists(&mut self, prefix: NamespacePrefix<'_>, name: &str) {
        self.events.push(format!("attr-exists({})", prefix.format(name)));
    }

    fn attribute_exact(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.events
            .push(format!("attr-exact({}={value})", prefix.format(name)));
    }

    fn attribute_includes(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.events
            .push(format!("attr-includes({}~={value})", prefix.format(name)));
    }

    fn attribute_dash_match(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.events
            .push(format!("attr-dash({}|={value})", prefix.format(name)));
    }

    fn attribute_prefix_match(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.events
            .push(format!("attr-prefix({}^={value})", prefix.format(name)));
    }

    fn attribute_suffix_match(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.events
            .push(format!("attr-suffix({}$={value})", prefix.format(name)));
    }

    fn attribute_substring(&mut self, prefix: NamespacePrefix<'_>, name: &str, value: &str) {
        self.events
            .push(format!("attr-substring({}*={value})", prefix.format(name)));
    }

    fn first_child(&mut self) {
        self.events.push("first-child".to_owned());
    }

    fn last_child(&mut self) {
        self.events.push("last-child".to_owned());
    }

    fn nth_child(&mut self, a: i32, b: i32) {
        self.events.push(format!("nth-child({a},{b})"));
    }

    fn nth_last_child(&mut self, a: i32, b: i32) {
        self.events.push(format!("nth-last-child({a},{b})"));
    }

    fn only_child(&mut self) {
        self.events.push("only-child".to_owned());
    }

    fn empty(&mut self) {
        self.events.push("empty".to_owned());
    }

    fn child(&mut self) {
        self.events.push("child".to_owned());
    }

    fn descendant(&mut self) {
        self.events.push("descendant".to_owned());
    }

    fn adjacent(&mut self) {
        self.events.push("adjacent".to_owned());
    }

    fn general_sibling(&mut self) {
        self.events.push("general-sibling".to_owned());
    }
}

/// Compile `selector` with a fresh [`Recorder`] and return the events.
pub fn record(selector: &str) -> Result<Vec<String>, crate::SyntaxError> {
    crate::compile(selector, Recorder::default())
}
