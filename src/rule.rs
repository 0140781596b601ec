//! The rule contract.
//!
//! A rule is a pure predicate over an input value plus the context it sits
//! in. Rules never mutate the input, the context, or any report; a failing
//! rule only contributes its message template, which the validator renders
//! (see [`crate::message`]) before storing it in a [`crate::Report`].

use serde_json::Value;

/// Context handed to a rule alongside the value under validation.
pub struct RuleContext<'a> {
    /// Name of the attribute being validated, when the value is a nested
    /// attribute rather than the root input.
    pub attribute: Option<&'a str>,
    /// The object the value was read from — the value's siblings. For the
    /// root input this is the input itself.
    pub siblings: &'a Value,
}

impl<'a> RuleContext<'a> {
    /// Context for validating a root value, which is its own sibling scope.
    pub fn root(input: &'a Value) -> Self {
        Self {
            attribute: None,
            siblings: input,
        }
    }
}

/// A single validation check.
///
/// Implementations are leaves with no internal structure: a handful of
/// parameters, a predicate, and a message template. See [`crate::rules`]
/// for the built-in set and [`crate::RuleRegistry`] for name-based lookup.
pub trait Rule {
    /// Canonical name, used to key failures in a report and to register
    /// the rule for lookup.
    fn name(&self) -> &str;

    /// Tests the value. Returns `false` on failure.
    fn validate(&self, input: &Value, context: &RuleContext<'_>) -> bool;

    /// Failure message template. May contain `:attribute` and any token
    /// named by [`params`](Self::params).
    fn message(&self) -> &str;

    /// Values substituted for the template's parameter tokens, e.g.
    /// `("max", "10")` for a `:max` token. Defaults to none.
    fn params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
