//! Name-based rule lookup.
//!
//! A [`RuleRegistry`] maps canonical rule names to factories that build a
//! boxed [`Rule`] from JSON-typed constructor arguments. The default
//! registry knows every built-in that can be constructed from plain values;
//! [`crate::rules::Callback`] has no factory, since a predicate cannot be
//! expressed as arguments.

use crate::error::RuleError;
use crate::rule::Rule;
use crate::rules;
use serde_json::Value;
use std::collections::HashMap;

type RuleFactory = Box<dyn Fn(&[Value]) -> Result<Box<dyn Rule>, RuleError> + Send + Sync>;

/// Factory table resolving rule names to rule instances.
pub struct RuleRegistry {
    factories: HashMap<String, RuleFactory>,
}

impl RuleRegistry {
    /// A registry with no rules registered.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory under a name, replacing any previous entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&[Value]) -> Result<Box<dyn Rule>, RuleError> + Send + Sync + 'static,
    ) -> &mut Self {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }

    /// Whether a rule is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Builds the rule registered under `name` from `args`.
    ///
    /// # Errors
    ///
    /// [`RuleError::UnknownRule`] when nothing is registered under the
    /// name, [`RuleError::BadArgs`] when the factory rejects the arguments.
    pub fn lookup(&self, name: &str, args: &[Value]) -> Result<Box<dyn Rule>, RuleError> {
        match self.factories.get(name) {
            Some(factory) => factory(args),
            None => Err(RuleError::UnknownRule {
                name: name.to_string(),
            }),
        }
    }
}

/// Registers every arg-constructible built-in under its canonical name.
impl Default for RuleRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();

        registry.register("has_less_than", |args| {
            Ok(Box::new(rules::HasLessThan::new(usize_arg(
                "has_less_than",
                args,
                0,
            )?)))
        });
        registry.register("is_integer", |_args| Ok(Box::new(rules::IsInteger)));
        registry.register("in", |args| Ok(Box::new(rules::In::new(args.to_vec()))));
        registry.register("max", |args| {
            Ok(Box::new(rules::Max::new(f64_arg("max", args, 0)?)))
        });
        registry.register("min", |args| {
            Ok(Box::new(rules::Min::new(f64_arg("min", args, 0)?)))
        });
        registry.register("min_length", |args| {
            Ok(Box::new(rules::MinLength::new(usize_arg(
                "min_length",
                args,
                0,
            )?)))
        });
        registry.register("max_length", |args| {
            Ok(Box::new(rules::MaxLength::new(usize_arg(
                "max_length",
                args,
                0,
            )?)))
        });
        registry.register("required", |_args| Ok(Box::new(rules::Required)));
        registry.register("matches", |args| {
            let pattern = str_arg("matches", args, 0)?;
            let rule = rules::Matches::new(pattern).map_err(|e| RuleError::BadArgs {
                rule: "matches".to_string(),
                message: e.to_string(),
            })?;
            Ok(Box::new(rule))
        });

        #[cfg(feature = "cel-eval")]
        registry.register("expr", |args| {
            Ok(Box::new(rules::Expr::new(str_arg("expr", args, 0)?)))
        });

        registry
    }
}

// ─── Argument coercion ──────────────────────────────────────────────────────

fn usize_arg(rule: &str, args: &[Value], index: usize) -> Result<usize, RuleError> {
    args.get(index)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .ok_or_else(|| bad_arg(rule, index, "a non-negative integer"))
}

fn f64_arg(rule: &str, args: &[Value], index: usize) -> Result<f64, RuleError> {
    args.get(index)
        .and_then(Value::as_f64)
        .ok_or_else(|| bad_arg(rule, index, "a number"))
}

fn str_arg<'a>(rule: &str, args: &'a [Value], index: usize) -> Result<&'a str, RuleError> {
    args.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| bad_arg(rule, index, "a string"))
}

fn bad_arg(rule: &str, index: usize, expected: &str) -> RuleError {
    RuleError::BadArgs {
        rule: rule.to_string(),
        message: format!("argument {} must be {}", index, expected),
    }
}
