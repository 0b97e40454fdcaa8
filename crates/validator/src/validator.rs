//! The validation engine
//!
//! A [`Validator`] holds field rules, scenes and messages, and checks a bag
//! of values against the rules of the active scene. Evaluation stops at the
//! first failing rule; only that failure is recorded.
//!
//! # Single-threaded use
//!
//! Configuration and `check` both take `&mut self`. A validator is plain
//! owned state with no interior locking; share one across threads only
//! behind your own synchronization, or give each task its own instance
//! (cloning is cheap for the registry, which shares predicates by `Arc`).

use std::collections::HashSet;

use fieldcheck_rule::{REQUIRE, RuleCall, RuleRegistry, RuleResult, RuleSpec, ValueKind};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::builder::ValidatorBuilder;
use crate::config::{FieldOrder, RuleSet, ValidatorConfig};
use crate::error::{ValidatorError, ValidatorResult};
use crate::message::Messages;

/// A bag of named input values.
pub type Values = Map<String, Value>;

/// Separator between field names in a scene definition.
pub const SCENE_SEPARATOR: char = ',';

/// Stand-in passed to predicates for an absent field.
static NULL: Value = Value::Null;

/// What `check` does when a field fails a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckMode {
    /// Return `Ok(false)` and record the failure.
    #[default]
    Report,
    /// Return [`ValidatorError::Failed`] carrying the resolved message.
    ///
    /// A missing `require` field is still reported as `Ok(false)`; only
    /// failing rules are escalated.
    FailFast,
}

/// The failure recorded by the most recent `check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Field that failed.
    pub field: String,
    /// Name of the failing rule.
    pub rule: String,
    /// The rule token as configured, arguments included.
    pub token: String,
    /// Parsed arguments of the failing rule.
    pub args: Vec<String>,
    /// Resolved human-readable message.
    pub message: String,
}

impl Failure {
    /// True when the field was missing or empty and marked `require`.
    pub fn is_required(&self) -> bool {
        self.rule == REQUIRE
    }
}

/// Rule-string driven field validator.
///
/// # Examples
///
/// ```
/// use fieldcheck_validator::{Validator, Values};
/// use serde_json::json;
///
/// let mut validator = Validator::new();
/// validator
///     .set_rules([("user", "require|alphaNum"), ("pass", "require|length:6,20")])
///     .set_messages([("pass.length", "password must be 6 to 20 characters")]);
///
/// let values: Values = json!({ "user": "alice", "pass": "123" })
///     .as_object()
///     .cloned()
///     .unwrap_or_default();
///
/// assert_eq!(validator.check(&values).unwrap(), false);
/// assert_eq!(validator.last_error(), "password must be 6 to 20 characters");
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    registry: RuleRegistry,
    rules: IndexMap<String, Vec<RuleSpec>>,
    scenes: IndexMap<String, Vec<String>>,
    messages: Messages,
    scene: String,
    last_failure: Option<Failure>,
}

impl Validator {
    /// Creates a validator with the built-in rules and default configuration.
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Creates a validator with the built-in rules.
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self::with_registry(config, RuleRegistry::new())
    }

    /// Creates a validator around an existing registry.
    pub fn with_registry(config: ValidatorConfig, registry: RuleRegistry) -> Self {
        Self {
            config,
            registry,
            rules: IndexMap::new(),
            scenes: IndexMap::new(),
            messages: Messages::new(),
            scene: String::new(),
            last_failure: None,
        }
    }

    /// Create a builder
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Clears all rules, scenes, messages and the last failure, and reseeds
    /// the registry with only the built-in rules.
    pub fn reset(&mut self) -> &mut Self {
        self.registry = RuleRegistry::new();
        self.rules.clear();
        self.scenes.clear();
        self.messages.clear();
        self.scene.clear();
        self.last_failure = None;
        self
    }

    /// Engine configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The rule registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Mutable access to the rule registry.
    pub fn registry_mut(&mut self) -> &mut RuleRegistry {
        &mut self.registry
    }

    /// Registers a custom rule, replacing any rule of the same name,
    /// built-ins included.
    pub fn register_rule<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&RuleCall<'_>) -> bool + Send + Sync + 'static,
    {
        self.registry.register(name, predicate);
        self
    }

    /// Registers a custom rule that can reject its own arguments.
    pub fn register_fallible_rule<F>(&mut self, name: impl Into<String>, predicate: F) -> &mut Self
    where
        F: Fn(&RuleCall<'_>) -> RuleResult<bool> + Send + Sync + 'static,
    {
        self.registry.register_fallible(name, predicate);
        self
    }

    /// Upserts field rules; each value is a `|`-separated list of tokens.
    pub fn set_rules<I, K, V>(&mut self, rules: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        for (field, list) in rules {
            let specs = list
                .as_ref()
                .split(fieldcheck_rule::spec::RULE_SEPARATOR)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(RuleSpec::parse)
                .collect();
            self.rules.insert(field.into(), specs);
        }
        self
    }

    /// Upserts scenes; each value is a `,`-separated list of field names.
    ///
    /// The active scene picks up the change on the next `check`.
    pub fn set_scenes<I, K, V>(&mut self, scenes: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        for (name, fields) in scenes {
            let fields = fields
                .as_ref()
                .split(SCENE_SEPARATOR)
                .map(str::trim)
                .filter(|field| !field.is_empty())
                .map(str::to_owned)
                .collect();
            self.scenes.insert(name.into(), fields);
        }
        self
    }

    /// Selects the active scene.
    ///
    /// An empty or undefined name means every configured field is checked.
    pub fn scene(&mut self, name: impl Into<String>) -> &mut Self {
        self.scene = name.into();
        debug!(
            scene = %self.scene,
            defined = self.scenes.contains_key(&self.scene),
            "Selected scene"
        );
        self
    }

    /// Name of the active scene, empty for the default.
    pub fn current_scene(&self) -> &str {
        &self.scene
    }

    /// Upserts `"field.rule"` message overrides.
    pub fn set_messages<I, K, V>(&mut self, messages: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, message) in messages {
            self.messages.set_override(key, message);
        }
        self
    }

    /// Upserts per-rule default messages.
    pub fn set_type_messages<I, K, V>(&mut self, messages: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (rule, message) in messages {
            self.messages.set_type_default(rule, message);
        }
        self
    }

    /// Message tables.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Applies every definition in a rule set.
    pub fn apply(&mut self, set: RuleSet) -> &mut Self {
        self.set_rules(set.rules)
            .set_scenes(set.scenes)
            .set_messages(set.messages)
            .set_type_messages(set.type_messages)
    }

    /// Rules configured for a field.
    pub fn rules_for(&self, field: &str) -> Option<&[RuleSpec]> {
        self.rules.get(field).map(Vec::as_slice)
    }

    /// The fields and rules `check` will evaluate, in evaluation order.
    ///
    /// Derived from the current scene and rules on every call, so it never
    /// lags behind configuration changes.
    pub fn check_set(&self) -> Vec<(&str, &[RuleSpec])> {
        let scene = Some(self.scene.as_str())
            .filter(|name| !name.is_empty())
            .and_then(|name| self.scenes.get(name));

        let mut set: Vec<(&str, &[RuleSpec])> = match scene {
            Some(fields) => {
                let mut seen = HashSet::new();
                fields
                    .iter()
                    .filter(|field| seen.insert(field.as_str()))
                    .filter_map(|field| self.rules.get_key_value(field.as_str()))
                    .map(|(field, specs)| (field.as_str(), specs.as_slice()))
                    .collect()
            }
            None => self
                .rules
                .iter()
                .map(|(field, specs)| (field.as_str(), specs.as_slice()))
                .collect(),
        };

        if self.config.field_order == FieldOrder::Sorted {
            set.sort_by(|a, b| a.0.cmp(b.0));
        }
        set
    }

    /// Checks `values` against the active check set.
    ///
    /// Returns `Ok(true)` if every rule passed or was skipped, and
    /// `Ok(false)` on the first failing rule, which is then available from
    /// [`last_error`](Self::last_error). Unknown rules and malformed rule
    /// arguments are returned as [`ValidatorError::Configuration`].
    pub fn check(&mut self, values: &Values) -> ValidatorResult<bool> {
        self.check_with(values, CheckMode::Report)
    }

    /// Like [`check`](Self::check), but a failing rule is returned as
    /// [`ValidatorError::Failed`]. A missing required field still yields
    /// `Ok(())`; inspect [`last_failure`](Self::last_failure) for it.
    pub fn check_or_fail(&mut self, values: &Values) -> ValidatorResult<()> {
        self.check_with(values, CheckMode::FailFast).map(|_| ())
    }

    /// Checks `values`, escalating failures according to `mode`.
    pub fn check_with(&mut self, values: &Values, mode: CheckMode) -> ValidatorResult<bool> {
        self.last_failure = None;

        let Some(failure) = self.evaluate(values)? else {
            return Ok(true);
        };

        debug!(
            field = %failure.field,
            rule = %failure.token,
            message = %failure.message,
            "Validation failed"
        );

        let error = match mode {
            CheckMode::FailFast if !failure.is_required() => Some(ValidatorError::Failed {
                field: failure.field.clone(),
                rule: failure.rule.clone(),
                message: failure.message.clone(),
            }),
            _ => None,
        };
        self.last_failure = Some(failure);

        match error {
            Some(error) => Err(error),
            None => Ok(false),
        }
    }

    /// Message of the most recent failure, empty if the last check passed.
    pub fn last_error(&self) -> &str {
        self.last_failure
            .as_ref()
            .map_or("", |failure| failure.message.as_str())
    }

    /// The most recent failure.
    pub fn last_failure(&self) -> Option<&Failure> {
        self.last_failure.as_ref()
    }

    fn evaluate(&self, values: &Values) -> ValidatorResult<Option<Failure>> {
        for (field, specs) in self.check_set() {
            let value = values.get(field);
            let present = value.is_some_and(|v| !fieldcheck_rule::value::is_empty_string(v));
            let required = specs.iter().any(|spec| spec.is(REQUIRE));

            if !required && !present {
                trace!(field, "Skipping optional field");
                continue;
            }

            for spec in specs {
                if spec.is(REQUIRE) {
                    if !present {
                        return Ok(Some(self.failure(field, spec)));
                    }
                    continue;
                }

                let call = RuleCall::new(value.unwrap_or(&NULL), spec.raw(), values, spec.args())
                    .with_length_mode(self.config.length_mode);
                let passed = self
                    .registry
                    .call(spec.name(), &call)
                    .map_err(|source| ValidatorError::configuration(field, source))?;

                trace!(
                    field,
                    rule = spec.raw(),
                    kind = ValueKind::of(call.value).name(),
                    passed,
                    "Evaluated rule"
                );
                if !passed {
                    return Ok(Some(self.failure(field, spec)));
                }
            }
        }
        Ok(None)
    }

    fn failure(&self, field: &str, spec: &RuleSpec) -> Failure {
        Failure {
            field: field.to_owned(),
            rule: spec.name().to_owned(),
            token: spec.raw().to_owned(),
            args: spec.args().to_vec(),
            message: self.messages.resolve(field, spec.name()),
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
