//! Built-in rule variants.
//!
//! Each rule is a small, independent predicate: a couple of parameters, a
//! `validate` and a message template. Rules operate on [`serde_json::Value`]
//! inputs; type mismatches fail the rule rather than panicking (a string
//! fed to [`Max`] is simply invalid).

use crate::rule::{Rule, RuleContext};
use regex::Regex;
use serde_json::Value;

// ─── has_less_than ──────────────────────────────────────────────────────────

/// Checks that the input holds strictly fewer elements than a bound.
/// Counts array elements or object entries.
#[derive(Clone, Debug)]
pub struct HasLessThan {
    count: usize,
}

impl HasLessThan {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl Rule for HasLessThan {
    fn name(&self) -> &str {
        "has_less_than"
    }

    fn validate(&self, input: &Value, _context: &RuleContext<'_>) -> bool {
        match input {
            Value::Array(items) => items.len() < self.count,
            Value::Object(entries) => entries.len() < self.count,
            _ => false,
        }
    }

    fn message(&self) -> &str {
        ":attribute must have less than :count elements."
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![("count", self.count.to_string())]
    }
}

// ─── is_integer ─────────────────────────────────────────────────────────────

/// Checks that the input is an integer-typed number.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsInteger;

impl Rule for IsInteger {
    fn name(&self) -> &str {
        "is_integer"
    }

    fn validate(&self, input: &Value, _context: &RuleContext<'_>) -> bool {
        matches!(input, Value::Number(n) if n.is_i64() || n.is_u64())
    }

    fn message(&self) -> &str {
        ":attribute must be an integer."
    }
}

// ─── in ─────────────────────────────────────────────────────────────────────

/// Checks that the input is one of a fixed set of values.
#[derive(Clone, Debug)]
pub struct In {
    values: Vec<Value>,
}

impl In {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl Rule for In {
    fn name(&self) -> &str {
        "in"
    }

    fn validate(&self, input: &Value, _context: &RuleContext<'_>) -> bool {
        self.values.contains(input)
    }

    fn message(&self) -> &str {
        ":attribute is invalid."
    }
}

// ─── max / min ──────────────────────────────────────────────────────────────

/// Checks that the input is a number less than or equal to a bound.
#[derive(Clone, Copy, Debug)]
pub struct Max {
    max: f64,
}

impl Max {
    pub fn new(max: f64) -> Self {
        Self { max }
    }
}

impl Rule for Max {
    fn name(&self) -> &str {
        "max"
    }

    fn validate(&self, input: &Value, _context: &RuleContext<'_>) -> bool {
        input.as_f64().is_some_and(|v| v <= self.max)
    }

    fn message(&self) -> &str {
        ":attribute must be less than :max."
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![("max", self.max.to_string())]
    }
}

/// Checks that the input is a number greater than or equal to a bound.
#[derive(Clone, Copy, Debug)]
pub struct Min {
    min: f64,
}

impl Min {
    pub fn new(min: f64) -> Self {
        Self { min }
    }
}

impl Rule for Min {
    fn name(&self) -> &str {
        "min"
    }

    fn validate(&self, input: &Value, _context: &RuleContext<'_>) -> bool {
        input.as_f64().is_some_and(|v| v >= self.min)
    }

    fn message(&self) -> &str {
        ":attribute must be at least :min."
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![("min", self.min.to_string())]
    }
}

// ─── min_length / max_length ────────────────────────────────────────────────

/// Checks that the input is a string of at least `length` characters.
#[derive(Clone, Copy, Debug)]
pub struct MinLength {
    length: usize,
}

impl MinLength {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Rule for MinLength {
    fn name(&self) -> &str {
        "min_length"
    }

    fn validate(&self, input: &Value, _context: &RuleContext<'_>) -> bool {
        input
            .as_str()
            .is_some_and(|s| s.chars().count() >= self.length)
    }

    fn message(&self) -> &str {
        ":attribute must be at least :length characters long."
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![("length", self.length.to_string())]
    }
}

/// Checks that the input is a string of at most `length` characters.
#[derive(Clone, Copy, Debug)]
pub struct MaxLength {
    length: usize,
}

impl MaxLength {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Rule for MaxLength {
    fn name(&self) -> &str {
        "max_length"
    }

    fn validate(&self, input: &Value, _context: &RuleContext<'_>) -> bool {
        input
            .as_str()
            .is_some_and(|s| s.chars().count() <= self.length)
    }

    fn message(&self) -> &str {
        ":attribute must be at most :length characters long."
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        vec![("length", self.length.to_string())]
    }
}

// ─── required ───────────────────────────────────────────────────────────────

/// Checks that the input is present: neither null nor an empty string.
/// Missing attributes reach rules as null.
#[derive(Clone, Copy, Debug, Default)]
pub struct Required;

impl Rule for Required {
    fn name(&self) -> &str {
        "required"
    }

    fn validate(&self, input: &Value, _context: &RuleContext<'_>) -> bool {
        match input {
            Value::Null => false,
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    fn message(&self) -> &str {
        ":attribute is required."
    }
}

// ─── matches ────────────────────────────────────────────────────────────────

/// Checks that the input is a string matching a regular expression.
#[derive(Clone, Debug)]
pub struct Matches {
    regex: Regex,
}

impl Matches {
    /// Compiles the pattern. Fails on invalid regex syntax.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Rule for Matches {
    fn name(&self) -> &str {
        "matches"
    }

    fn validate(&self, input: &Value, _context: &RuleContext<'_>) -> bool {
        input.as_str().is_some_and(|s| self.regex.is_match(s))
    }

    fn message(&self) -> &str {
        ":attribute has an invalid format."
    }
}

// ─── callback ───────────────────────────────────────────────────────────────

/// Escape hatch: delegates validation to an arbitrary predicate.
///
/// The predicate receives the value and its [`RuleContext`], so checks
/// against sibling values ("confirm equals password") stay expressible
/// without a dedicated rule type.
pub struct Callback {
    predicate: Box<dyn Fn(&Value, &RuleContext<'_>) -> bool>,
}

impl Callback {
    pub fn new(predicate: impl Fn(&Value, &RuleContext<'_>) -> bool + 'static) -> Self {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl Rule for Callback {
    fn name(&self) -> &str {
        "callback"
    }

    fn validate(&self, input: &Value, context: &RuleContext<'_>) -> bool {
        (self.predicate)(input, context)
    }

    fn message(&self) -> &str {
        ":attribute is invalid."
    }
}

// ─── expr (behind `cel-eval`) ───────────────────────────────────────────────

/// Checks the input against a CEL expression.
///
/// The expression sees two variables: `value` (the input under validation)
/// and `siblings` (the surrounding object). Anything other than a `true`
/// result fails the rule, compile and evaluation errors included.
#[cfg(feature = "cel-eval")]
#[derive(Clone, Debug)]
pub struct Expr {
    expression: String,
}

#[cfg(feature = "cel-eval")]
impl Expr {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}

#[cfg(feature = "cel-eval")]
impl Rule for Expr {
    fn name(&self) -> &str {
        "expr"
    }

    fn validate(&self, input: &Value, context: &RuleContext<'_>) -> bool {
        let program = match cel::Program::compile(&self.expression) {
            Ok(program) => program,
            Err(_) => return false,
        };

        let mut cel_ctx = cel::Context::default();
        cel_ctx.add_variable_from_value("value", json_to_cel(input));
        cel_ctx.add_variable_from_value("siblings", json_to_cel(context.siblings));

        matches!(program.execute(&cel_ctx), Ok(cel::Value::Bool(true)))
    }

    fn message(&self) -> &str {
        ":attribute is invalid."
    }
}

/// Convert serde_json::Value → cel::Value.
#[cfg(feature = "cel-eval")]
fn json_to_cel(value: &Value) -> cel::Value {
    use std::collections::HashMap;
    use std::sync::Arc;

    match value {
        Value::Null => cel::Value::Null,
        Value::Bool(b) => cel::Value::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                cel::Value::Int(i)
            } else if let Some(u) = n.as_u64() {
                cel::Value::UInt(u)
            } else if let Some(f) = n.as_f64() {
                cel::Value::Float(f)
            } else {
                cel::Value::Null
            }
        }
        Value::String(s) => cel::Value::String(Arc::new(s.clone())),
        Value::Array(items) => {
            let items: Vec<cel::Value> = items.iter().map(json_to_cel).collect();
            cel::Value::List(Arc::new(items))
        }
        Value::Object(entries) => {
            let entries: HashMap<String, cel::Value> = entries
                .iter()
                .map(|(k, v)| (k.clone(), json_to_cel(v)))
                .collect();
            entries.into()
        }
    }
}
