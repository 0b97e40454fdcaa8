//! Error types for the validation engine
//!
//! A value failing a rule is normally not an error at all: `check` returns
//! `Ok(false)` and records the failure. The variants here cover rule
//! definitions that cannot be evaluated, and failures the caller asked to
//! have escalated with [`CheckMode::FailFast`](crate::CheckMode::FailFast).

use fieldcheck_rule::RuleError;
use thiserror::Error;

/// Result type for validator operations.
pub type ValidatorResult<T> = Result<T, ValidatorError>;

/// Validation engine errors
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// A rule on `field` is unknown or was given bad arguments.
    #[error("Rule configuration error on field '{field}': {source}")]
    Configuration {
        field: String,
        #[source]
        source: RuleError,
    },

    /// A field failed a rule while checking in fail-fast mode.
    #[error("{message}")]
    Failed {
        field: String,
        rule: String,
        message: String,
    },

    /// A rule set could not be deserialized.
    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(#[from] serde_json::Error),
}

impl ValidatorError {
    /// Get error code for categorization
    pub fn code(&self) -> &'static str {
        match self {
            Self::Configuration { source, .. } => source.code(),
            Self::Failed { .. } => "VALIDATE:FAILED",
            Self::InvalidRuleSet(_) => "VALIDATE:RULE_SET",
        }
    }

    /// Wraps a rule error with the field it was raised for.
    pub fn configuration(field: impl Into<String>, source: RuleError) -> Self {
        Self::Configuration {
            field: field.into(),
            source,
        }
    }

    /// Returns true for errors that indicate broken rule definitions rather
    /// than bad input data.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::InvalidRuleSet(_))
    }

    /// The underlying rule error, if any.
    pub fn rule_error(&self) -> Option<&RuleError> {
        match self {
            Self::Configuration { source, .. } => Some(source),
            _ => None,
        }
    }
}
