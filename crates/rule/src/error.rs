//! Error types for rule resolution and evaluation
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.

use thiserror::Error;

/// Result type for rule evaluation.
pub type RuleResult<T> = Result<T, RuleError>;

/// Errors raised while resolving or evaluating a rule.
///
/// None of these describe bad input data. A value that fails a rule is a
/// plain `Ok(false)`; these variants mean the rule definitions themselves
/// are wrong and the caller has a bug to fix.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule name was never registered.
    #[error("Rule '{name}' not found")]
    NotFound { name: String },

    /// The rule was given the wrong number of arguments, or an argument
    /// that does not parse as the number the rule expects.
    #[error("Invalid arguments for rule '{rule}': {message}")]
    InvalidArguments { rule: String, message: String },
}

impl RuleError {
    /// Get error code for categorization
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "RULE:NOT_FOUND",
            Self::InvalidArguments { .. } => "RULE:INVALID_ARGS",
        }
    }

    /// Create a not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create an invalid-arguments error
    pub fn invalid_arguments(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Returns the rule name this error refers to.
    pub fn rule(&self) -> &str {
        match self {
            Self::NotFound { name } => name,
            Self::InvalidArguments { rule, .. } => rule,
        }
    }
}
