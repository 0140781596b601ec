//! Schema walking.
//!
//! A [`Validator`] mirrors the shape of the input it validates: rules on
//! the node itself plus one nested validator per attribute, addressed with
//! the same dotted paths as [`Report`]. Running it never mutates the input;
//! the result is a freshly populated report.

use crate::message;
use crate::report::Report;
use crate::rule::{Rule, RuleContext};
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;

/// Display name used for `:attribute` when validating a root value that
/// has no attribute name and no override.
const ROOT_NAME: &str = "value";

/// A schema of rules over an input value and its nested attributes.
#[derive(Default)]
pub struct Validator {
    display_name: Option<String>,
    rules: Vec<Box<dyn Rule>>,
    messages: HashMap<String, String>,
    attributes: IndexMap<String, Validator>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to this node. Rules run in the order they were added.
    pub fn rule(&mut self, rule: impl Rule + 'static) -> &mut Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds an already-boxed rule, e.g. one built by a
    /// [`RuleRegistry`](crate::RuleRegistry) lookup.
    pub fn boxed_rule(&mut self, rule: Box<dyn Rule>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Overrides the message template used when the named rule fails on
    /// this node.
    pub fn message(&mut self, rule: impl Into<String>, template: impl Into<String>) -> &mut Self {
        self.messages.insert(rule.into(), template.into());
        self
    }

    /// Sets the display name substituted for `:attribute` in this node's
    /// messages, instead of the raw attribute name.
    pub fn display_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.display_name = Some(name.into());
        self
    }

    /// Resolves a dotted path to a nested attribute validator, creating
    /// every missing node along the way.
    pub fn attribute(&mut self, path: &str) -> &mut Validator {
        let mut node = self;
        for segment in path.split('.') {
            node = node.attributes.entry(segment.to_string()).or_default();
        }
        node
    }

    /// Validates the input, returning the populated report.
    ///
    /// Each failing rule stores its rendered message under the rule's
    /// canonical name. Attribute validators run against `input[name]`
    /// (missing attributes validate as null) with `input` as the sibling
    /// context; a child report is attached only when it carries errors, so
    /// a fully valid input yields a report with `valid() == true`.
    pub fn validate(&self, input: &Value) -> Report {
        self.validate_node(input, input, None)
    }

    /// Shortcut for `validate(input).valid()`.
    pub fn valid(&self, input: &Value) -> bool {
        self.validate(input).valid()
    }

    fn validate_node(&self, input: &Value, siblings: &Value, attribute: Option<&str>) -> Report {
        let mut report = Report::new();
        let context = RuleContext {
            attribute,
            siblings,
        };

        let display = self
            .display_name
            .as_deref()
            .or(attribute)
            .unwrap_or(ROOT_NAME);

        for rule in &self.rules {
            if rule.validate(input, &context) {
                continue;
            }
            let template = self
                .messages
                .get(rule.name())
                .map(String::as_str)
                .unwrap_or_else(|| rule.message());
            report.set_rule(rule.name(), message::render(template, display, &rule.params()));
        }

        for (name, child) in &self.attributes {
            let value = input.get(name).unwrap_or(&Value::Null);
            let child_report = child.validate_node(value, input, Some(name.as_str()));
            if child_report.has_error() {
                report.set_attribute(name, child_report);
            }
        }

        report
    }
}
