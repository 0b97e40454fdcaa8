//! Registry mapping rule names to predicates
//!
//! The registry is seeded with the built-in rules and extended at runtime.
//! Registration is an upsert: a custom rule registered under a built-in's
//! name replaces the built-in for every later lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use crate::builtins;
use crate::error::{RuleError, RuleResult};
use crate::value::LengthMode;

/// Everything a predicate sees for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RuleCall<'a> {
    /// The field's value, `Value::Null` when the field is absent.
    pub value: &'a Value,
    /// The rule token exactly as configured, e.g. `between:3,20`.
    pub rule: &'a str,
    /// The whole value bag, for rules that compare against other fields.
    pub values: &'a Map<String, Value>,
    /// Positional arguments parsed from the token.
    pub args: &'a [String],
    /// How string lengths are counted by length-aware rules.
    pub length_mode: LengthMode,
}

impl<'a> RuleCall<'a> {
    /// Creates a call with the default length mode.
    pub fn new(
        value: &'a Value,
        rule: &'a str,
        values: &'a Map<String, Value>,
        args: &'a [String],
    ) -> Self {
        Self {
            value,
            rule,
            values,
            args,
            length_mode: LengthMode::default(),
        }
    }

    /// Sets the length mode.
    #[must_use]
    pub fn with_length_mode(mut self, length_mode: LengthMode) -> Self {
        self.length_mode = length_mode;
        self
    }

    /// Looks up another field in the bag.
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.values.get(name)
    }
}

/// A type-erased rule predicate.
///
/// Built-ins may return [`RuleError::InvalidArguments`]; infallible custom
/// rules are wrapped to always return `Ok`.
pub type Predicate = Arc<dyn Fn(&RuleCall<'_>) -> RuleResult<bool> + Send + Sync>;

/// Registry of named rule predicates.
///
/// Cloning is cheap: predicates are shared behind `Arc`.
#[derive(Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, Predicate>,
}

impl RuleRegistry {
    /// Creates a registry with every built-in rule registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        builtins::register_all(&mut registry);
        registry
    }

    /// Creates a registry with no rules at all.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Registers an infallible predicate, replacing any rule of that name.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck_rule::{RuleCall, RuleRegistry};
    /// use serde_json::{Map, json};
    ///
    /// let mut registry = RuleRegistry::new();
    /// registry.register("even", |call: &RuleCall<'_>| {
    ///     call.value.as_i64().is_some_and(|n| n % 2 == 0)
    /// });
    ///
    /// let bag = Map::new();
    /// let no_args: Vec<String> = Vec::new();
    /// let four = json!(4);
    /// let call = RuleCall::new(&four, "even", &bag, &no_args);
    /// assert_eq!(registry.call("even", &call), Ok(true));
    /// ```
    pub fn register<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&RuleCall<'_>) -> bool + Send + Sync + 'static,
    {
        self.insert(
            name.into(),
            Arc::new(move |call: &RuleCall<'_>| Ok(predicate(call))),
        )
    }

    /// Registers a predicate that can reject its own configuration.
    pub fn register_fallible<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&RuleCall<'_>) -> RuleResult<bool> + Send + Sync + 'static,
    {
        self.insert(name.into(), Arc::new(predicate))
    }

    fn insert(&mut self, name: String, predicate: Predicate) -> &mut Self {
        let shadowed = self.rules.insert(name.clone(), predicate).is_some();
        debug!(rule = %name, shadowed, "Registered rule");
        self
    }

    /// Removes a rule, returning whether it was registered.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.rules.remove(name).is_some()
    }

    /// Looks up a predicate by name.
    pub fn resolve(&self, name: &str) -> RuleResult<&Predicate> {
        self.rules
            .get(name)
            .ok_or_else(|| RuleError::not_found(name))
    }

    /// Resolves `name` and invokes it.
    pub fn call(&self, name: &str, call: &RuleCall<'_>) -> RuleResult<bool> {
        let predicate = self.resolve(name)?;
        predicate(call)
    }

    /// Check if a rule exists
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// All registered rule names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.rules.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
