//! The hierarchical error report produced by validation.
//!
//! A [`Report`] is a recursive tree: each node carries an optional `self`
//! error, an insertion-ordered map of rule failures, and one child report per
//! nested attribute that has been touched. Navigation uses dotted paths
//! (`"user.address.city"`), addressing a path always materializes the nodes
//! along it, and two reports covering overlapping attribute sets can be
//! merged without losing either shape.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Aggregated validation failures for one value and its nested attributes.
///
/// The serialized shape is the canonical interop form:
///
/// ```json
/// {
///   "self": "this value is invalid",
///   "rules": { "required": "name is required." },
///   "attributes": { "address": { "rules": { "min_length": "..." } } }
/// }
/// ```
///
/// All three fields are optional; deserializing recursively rebuilds the
/// child reports. An empty report (`count() == 0`) is valid even when a
/// `self` message is set — the message alone is descriptive context, not a
/// failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Report {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    self_error: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    rules: IndexMap<String, String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    attributes: IndexMap<String, Report>,
}

/// Result of an index-style read on a report.
///
/// Reading a key that names a stored rule failure yields the message;
/// any other key is resolved as an attribute path, creating the node on
/// demand.
pub enum Entry<'a> {
    /// A rule failure message stored directly on the node.
    Rule(&'a str),
    /// The child report resolved (and created if missing) at the key.
    Attribute(&'a mut Report),
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Self error ─────────────────────────────────────────────────────────

    /// The node's own top-level error, if one was set.
    pub fn self_error(&self) -> Option<&str> {
        self.self_error.as_deref()
    }

    /// Sets the node's own top-level error.
    pub fn set_self(&mut self, message: impl Into<String>) -> &mut Self {
        self.self_error = Some(message.into());
        self
    }

    // ─── Rule failures ──────────────────────────────────────────────────────

    /// The message stored for a rule, if that rule failed on this node.
    pub fn rule(&self, name: &str) -> Option<&str> {
        self.rules.get(name).map(String::as_str)
    }

    /// Records a rule failure. A later write under the same name replaces
    /// the message but keeps the rule's original position.
    pub fn set_rule(&mut self, name: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.rules.insert(name.into(), message.into());
        self
    }

    /// Whether a rule failure is stored under `name`.
    pub fn has_rule(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Removes a rule failure, returning its message. Later rules shift up,
    /// preserving their relative order.
    pub fn remove_rule(&mut self, name: &str) -> Option<String> {
        self.rules.shift_remove(name)
    }

    /// All rule failures on this node, in insertion order.
    pub fn rules(&self) -> &IndexMap<String, String> {
        &self.rules
    }

    /// Index-style read: the rule message under `key`, or the attribute
    /// report at that path (created if missing).
    pub fn get(&mut self, key: &str) -> Entry<'_> {
        if self.rules.contains_key(key) {
            return Entry::Rule(self.rules[key].as_str());
        }
        Entry::Attribute(self.attribute(key))
    }

    // ─── Tree navigation ────────────────────────────────────────────────────

    /// Resolves a dotted path to a child report, creating every missing
    /// node along the way.
    ///
    /// `attribute("a.b.c")` is equivalent to
    /// `attribute("a").attribute("b").attribute("c")`. Note that merely
    /// addressing a path materializes it: the child then counts toward
    /// [`count`](Self::count) even if it never receives an error. Use
    /// [`try_attribute`](Self::try_attribute) to look without touching.
    pub fn attribute(&mut self, path: &str) -> &mut Report {
        let mut node = self;
        for segment in path.split('.') {
            node = node.attributes.entry(segment.to_string()).or_default();
        }
        node
    }

    /// Replaces the report at a dotted path wholesale, creating missing
    /// intermediate nodes. Returns `self` for chaining.
    pub fn set_attribute(&mut self, path: &str, report: Report) -> &mut Self {
        match path.rsplit_once('.') {
            Some((parent, last)) => {
                self.attribute(parent)
                    .attributes
                    .insert(last.to_string(), report);
            }
            None => {
                self.attributes.insert(path.to_string(), report);
            }
        }
        self
    }

    /// Resolves a dotted path without creating anything. Returns `None` if
    /// any segment is missing.
    pub fn try_attribute(&self, path: &str) -> Option<&Report> {
        let mut node = self;
        for segment in path.split('.') {
            node = node.attributes.get(segment)?;
        }
        Some(node)
    }

    /// All direct child reports, in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, Report> {
        &self.attributes
    }

    // ─── Error lookup ───────────────────────────────────────────────────────

    /// The message for a failed rule, or, when no rule matches, the own
    /// `self` error of an existing child attribute under that name.
    ///
    /// Returns `None` when neither matches. Unlike [`attribute`](Self::attribute),
    /// this never creates nodes.
    pub fn error(&self, name: &str) -> Option<&str> {
        if let Some(message) = self.rules.get(name) {
            return Some(message.as_str());
        }
        self.attributes.get(name).and_then(|child| child.self_error())
    }

    /// The earliest recorded error on this node.
    ///
    /// Direct rule failures win; otherwise the first-inserted child's
    /// headline is used (its `self` error, else its own first rule
    /// message). The fallback is one level deep, not a search for the
    /// deepest leaf.
    pub fn first(&self) -> Option<&str> {
        if let Some(message) = self.rules.values().next() {
            return Some(message.as_str());
        }
        self.attributes.values().next().and_then(Report::headline)
    }

    /// [`first`](Self::first) of the child at a dotted path, or `None` when
    /// no such child exists.
    pub fn first_of(&self, path: &str) -> Option<&str> {
        self.try_attribute(path)?.first()
    }

    /// One representative message for this node: the `self` error if set,
    /// else the first rule failure.
    fn headline(&self) -> Option<&str> {
        self.self_error
            .as_deref()
            .or_else(|| self.rules.values().next().map(String::as_str))
    }

    /// Header used by `Display` and `full_message`: a non-empty `self`
    /// error, else `first()`.
    fn display_header(&self) -> Option<&str> {
        match self.self_error.as_deref() {
            Some(message) if !message.is_empty() => Some(message),
            _ => self.first(),
        }
    }

    /// A mapping of every error on this node.
    ///
    /// Rule failures appear under their rule name. With `nested` true, each
    /// child attribute contributes its full `errors(true)` object — a
    /// recursive mirror of the tree. With `nested` false, each child
    /// contributes its single representative message (its `self` error,
    /// else its first rule failure; `null` when it has neither), so the
    /// result stays one level deep.
    pub fn errors(&self, nested: bool) -> Value {
        let mut errors = serde_json::Map::new();
        for (name, message) in &self.rules {
            errors.insert(name.clone(), Value::String(message.clone()));
        }
        for (name, child) in &self.attributes {
            let entry = if nested {
                child.errors(true)
            } else {
                match child.headline() {
                    Some(message) => Value::String(message.to_string()),
                    None => Value::Null,
                }
            };
            errors.insert(name.clone(), entry);
        }
        Value::Object(errors)
    }

    /// The failed attributes of this node, as a JSON array.
    ///
    /// A child whose own `failed()` is empty appears as its bare name; a
    /// child with deeper attribute failures appears as a single-key object
    /// `{name: <child.failed()>}`. Note that a child materialized by
    /// addressing but never given an error still shows up as a bare name —
    /// there is deliberately no `has_error` guard here, matching the
    /// long-standing observable behavior.
    pub fn failed(&self) -> Value {
        let mut failed = Vec::new();
        for (name, child) in &self.attributes {
            let nested = child.failed();
            let has_nested = nested.as_array().is_some_and(|a| !a.is_empty());
            if has_nested {
                let mut entry = serde_json::Map::new();
                entry.insert(name.clone(), nested);
                failed.push(Value::Object(entry));
            } else {
                failed.push(Value::String(name.clone()));
            }
        }
        Value::Array(failed)
    }

    // ─── Flags and counting ─────────────────────────────────────────────────

    /// Whether any rule failure or child attribute is present.
    ///
    /// Addressing an attribute creates its node, so a report that was only
    /// navigated reads as having errors here. [`valid`](Self::valid) is the
    /// authoritative check for callers that may have addressed attributes.
    pub fn has_error(&self) -> bool {
        !self.rules.is_empty() || !self.attributes.is_empty()
    }

    /// Number of direct rule failures plus direct child attributes.
    /// Not recursive: an empty child still counts as one.
    pub fn count(&self) -> usize {
        self.rules.len() + self.attributes.len()
    }

    /// Whether the report is empty (`count() == 0`).
    pub fn valid(&self) -> bool {
        self.count() == 0
    }

    // ─── Merging ────────────────────────────────────────────────────────────

    /// Merges another report into this one.
    ///
    /// Rule failures from `other` extend this node's; a colliding rule name
    /// takes `other`'s message (last write wins) while keeping its original
    /// position. Every attribute of `other` is resolved on this node
    /// (creating it if missing) and merged recursively, so the resulting
    /// attribute tree is the union of both shapes.
    pub fn merge(&mut self, other: &Report) -> &mut Self {
        for (name, message) in &other.rules {
            self.rules.insert(name.clone(), message.clone());
        }
        for (name, child) in &other.attributes {
            self.attribute(name).merge(child);
        }
        self
    }

    // ─── Rendering ──────────────────────────────────────────────────────────

    /// A multi-line rendering: the headline, then one indented line per
    /// rule failure, then one indented line per direct child's first error.
    /// Children with nothing to show are skipped. One level deep only.
    pub fn full_message(&self) -> String {
        let mut out = format!("{}:", self.display_header().unwrap_or(""));
        for message in self.rules.values() {
            out.push_str("\n\t");
            out.push_str(message);
        }
        for child in self.attributes.values() {
            if let Some(first) = child.first() {
                out.push_str("\n\t");
                out.push_str(first);
            }
        }
        out
    }
}

/// Renders the report's single-line form: a non-empty `self` error if set,
/// else the first error, else nothing.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_header().unwrap_or(""))
    }
}
