//! Composable validation rules with hierarchical error reports.
//!
//! A [`Validator`] describes which [rules](rule::Rule) apply to a value and
//! to each of its nested attributes. Running it produces a [`Report`] — a
//! recursive, path-addressable tree that records which rule failed at which
//! node, merges with other reports, and renders both machine-readable and
//! human-readable views:
//!
//! ```text
//! Validator::validate(input) → Report → errors() / failed() / full_message()
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use verdict::Validator;
//! use verdict::rules::{MinLength, Required};
//!
//! let mut validator = Validator::new();
//! validator.attribute("email").rule(Required).rule(MinLength::new(6));
//!
//! let report = validator.validate(&json!({ "email": "" }));
//! assert!(!report.valid());
//! assert_eq!(report.first_of("email"), Some("email is required."));
//! ```
//!
//! Reports can also be built directly — a validator is just one producer:
//!
//! ```rust
//! use verdict::Report;
//!
//! let mut report = Report::new();
//! report.attribute("user.name").set_rule("required", "name is required.");
//! assert_eq!(report.first_of("user.name"), Some("name is required."));
//! ```
//!
//! # Feature Flags
//!
//! | Feature    | Default | Description |
//! |------------|---------|-------------|
//! | `cel-eval` | yes     | CEL expression rule ([`rules::Expr`]) via the [`cel`] crate. |

pub mod error;
pub mod message;
pub mod registry;
pub mod report;
pub mod rule;
pub mod rules;
pub mod validator;

pub use error::RuleError;
pub use registry::RuleRegistry;
pub use report::{Entry, Report};
pub use rule::{Rule, RuleContext};
pub use validator::Validator;

/// Convenience entry point composing validate → valid.
///
/// Returns `Ok(())` when the input passes, or the populated report when it
/// does not.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use verdict::Validator;
/// use verdict::rules::IsInteger;
///
/// let mut validator = Validator::new();
/// validator.rule(IsInteger);
///
/// assert!(verdict::check(&validator, &json!(3)).is_ok());
/// let report = verdict::check(&validator, &json!("three")).unwrap_err();
/// assert_eq!(report.rule("is_integer"), Some("value must be an integer."));
/// ```
pub fn check(validator: &Validator, input: &serde_json::Value) -> Result<(), Report> {
    let report = validator.validate(input);
    if report.valid() { Ok(()) } else { Err(report) }
}
