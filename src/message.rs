//! Failure message rendering.
//!
//! Rule templates carry `:token` placeholders (`:attribute`, `:max`,
//! `:length`, ...). The validator renders a template exactly once, at the
//! moment a failure is recorded; reports only ever store finished strings.

use regex::Regex;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([a-z][a-z0-9_]*)").unwrap());

/// Substitutes `:attribute` with the display name and each parameter token
/// with its value. Tokens without a matching parameter pass through
/// untouched.
pub fn render(template: &str, attribute: &str, params: &[(&'static str, String)]) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let token = &caps[1];
            if token == "attribute" {
                return attribute.to_string();
            }
            for (name, value) in params {
                if *name == token {
                    return value.clone();
                }
            }
            caps[0].to_string()
        })
        .into_owned()
}
