//! Validator configuration and serializable rule sets
//!
//! Both types deserialize from any in-memory `serde_json::Value`; where the
//! JSON comes from is the caller's business.

use fieldcheck_rule::LengthMode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ValidatorResult;

/// Order in which fields of the check set are evaluated.
///
/// Only the first failing field is reported, so the order decides which
/// error a caller sees when several fields are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldOrder {
    /// Order of the active scene's field list, or of rule insertion when no
    /// scene is active.
    #[default]
    Insertion,
    /// Lexicographic by field name.
    Sorted,
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Field evaluation order.
    pub field_order: FieldOrder,
    /// How `length`, `max` and `min` count string length.
    pub length_mode: LengthMode,
}

impl ValidatorConfig {
    /// Sets the field order.
    #[must_use]
    pub fn with_field_order(mut self, field_order: FieldOrder) -> Self {
        self.field_order = field_order;
        self
    }

    /// Sets the length mode.
    #[must_use]
    pub fn with_length_mode(mut self, length_mode: LengthMode) -> Self {
        self.length_mode = length_mode;
        self
    }
}

/// A complete set of rule, scene and message definitions.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::RuleSet;
/// use serde_json::json;
///
/// let set = RuleSet::from_value(json!({
///     "rules": { "user": "require|alphaNum", "pass": "require|length:6,20" },
///     "scenes": { "login": "user,pass" },
///     "messages": { "pass.length": "password must be 6 to 20 characters" }
/// }))
/// .unwrap();
///
/// assert_eq!(set.rules.len(), 2);
/// assert!(set.type_messages.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Field name to `|`-separated rule tokens.
    pub rules: IndexMap<String, String>,
    /// Scene name to `,`-separated field names.
    pub scenes: IndexMap<String, String>,
    /// `"field.rule"` to message.
    pub messages: IndexMap<String, String>,
    /// Rule name to message, used when no field-specific message exists.
    pub type_messages: IndexMap<String, String>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deserializes a rule set from a JSON value.
    pub fn from_value(value: Value) -> ValidatorResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Adds a field's rules.
    #[must_use]
    pub fn rule(mut self, field: impl Into<String>, rules: impl Into<String>) -> Self {
        self.rules.insert(field.into(), rules.into());
        self
    }

    /// Adds a scene.
    #[must_use]
    pub fn scene(mut self, name: impl Into<String>, fields: impl Into<String>) -> Self {
        self.scenes.insert(name.into(), fields.into());
        self
    }

    /// Adds a `"field.rule"` message.
    #[must_use]
    pub fn message(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(key.into(), message.into());
        self
    }

    /// Adds a rule-type message.
    #[must_use]
    pub fn type_message(mut self, rule: impl Into<String>, message: impl Into<String>) -> Self {
        self.type_messages.insert(rule.into(), message.into());
        self
    }
}
