use serde::{Deserialize, Serialize};
use std::fmt;

/// Produced when resolving a rule through the registry fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleError {
    /// No rule is registered under the requested name.
    UnknownRule { name: String },
    /// A rule factory rejected its constructor arguments.
    BadArgs { rule: String, message: String },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::UnknownRule { name } => write!(f, "unknown rule: {}", name),
            RuleError::BadArgs { rule, message } => {
                write!(f, "bad arguments for rule {}: {}", rule, message)
            }
        }
    }
}

impl std::error::Error for RuleError {}
