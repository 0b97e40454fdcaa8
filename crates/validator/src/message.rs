//! Error message resolution
//!
//! Lookup order for a failing `(field, rule)` pair:
//!
//! 1. the `"field.rule"` override,
//! 2. the default for the rule type,
//! 3. the synthesized `"<field> rule[<rule>] validation failed"`.
//!
//! The last step always succeeds, so resolution never fails.

use std::collections::HashMap;

/// Separator between field and rule in an override key.
pub const KEY_SEPARATOR: char = '.';

/// Message overrides and rule-type defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    overrides: HashMap<String, String>,
    type_defaults: HashMap<String, String>,
}

impl Messages {
    /// Creates an empty message table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for a `"field.rule"` key.
    pub fn set_override(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.overrides.insert(key.into(), message.into());
    }

    /// Sets the fallback message for every failure of `rule`.
    pub fn set_type_default(&mut self, rule: impl Into<String>, message: impl Into<String>) {
        self.type_defaults.insert(rule.into(), message.into());
    }

    /// Resolves the message for a failing rule on a field.
    ///
    /// ```
    /// use fieldcheck_validator::Messages;
    ///
    /// let mut messages = Messages::new();
    /// assert_eq!(messages.resolve("pass", "length"), "pass rule[length] validation failed");
    ///
    /// messages.set_type_default("length", "wrong length");
    /// assert_eq!(messages.resolve("pass", "length"), "wrong length");
    ///
    /// messages.set_override("pass.length", "password must be 6 to 20 characters");
    /// assert_eq!(messages.resolve("pass", "length"), "password must be 6 to 20 characters");
    /// ```
    pub fn resolve(&self, field: &str, rule: &str) -> String {
        let key = format!("{field}{KEY_SEPARATOR}{rule}");
        if let Some(message) = self.overrides.get(&key) {
            return message.clone();
        }
        if let Some(message) = self.type_defaults.get(rule) {
            return message.clone();
        }
        default_message(field, rule)
    }

    /// Number of `"field.rule"` overrides.
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Removes every override and default.
    pub fn clear(&mut self) {
        self.overrides.clear();
        self.type_defaults.clear();
    }
}

/// The message used when nothing more specific is configured.
pub fn default_message(field: &str, rule: &str) -> String {
    format!("{field} rule[{rule}] validation failed")
}
