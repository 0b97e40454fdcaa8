//! Builder for [`Validator`]

use fieldcheck_rule::{LengthMode, RuleCall, RuleRegistry, RuleResult};

use crate::config::{FieldOrder, RuleSet, ValidatorConfig};
use crate::validator::Validator;

/// Builder for [`Validator`]
///
/// ```
/// use fieldcheck_validator::{FieldOrder, Validator};
///
/// let validator = Validator::builder()
///     .field_order(FieldOrder::Sorted)
///     .rule("user", "require|alphaNum")
///     .rule("age", "between:18,99")
///     .scene("signup", "user,age")
///     .build();
///
/// assert_eq!(validator.check_set().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ValidatorBuilder {
    config: ValidatorConfig,
    registry: Option<RuleRegistry>,
    rules: RuleSet,
    scene: Option<String>,
}

impl ValidatorBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    #[must_use]
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set field evaluation order
    #[must_use]
    pub fn field_order(mut self, order: FieldOrder) -> Self {
        self.config.field_order = order;
        self
    }

    /// Set how string lengths are counted
    #[must_use]
    pub fn length_mode(mut self, mode: LengthMode) -> Self {
        self.config.length_mode = mode;
        self
    }

    /// Start from an existing registry instead of the built-ins
    #[must_use]
    pub fn registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Register a custom rule
    #[must_use]
    pub fn custom_rule<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&RuleCall<'_>) -> bool + Send + Sync + 'static,
    {
        self.registry
            .get_or_insert_with(RuleRegistry::new)
            .register(name, predicate);
        self
    }

    /// Register a custom rule that validates its own arguments
    #[must_use]
    pub fn fallible_rule<F>(mut self, name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&RuleCall<'_>) -> RuleResult<bool> + Send + Sync + 'static,
    {
        self.registry
            .get_or_insert_with(RuleRegistry::new)
            .register_fallible(name, predicate);
        self
    }

    /// Add a field's rules
    #[must_use]
    pub fn rule(mut self, field: impl Into<String>, rules: impl Into<String>) -> Self {
        self.rules = self.rules.rule(field, rules);
        self
    }

    /// Add a scene
    #[must_use]
    pub fn scene(mut self, name: impl Into<String>, fields: impl Into<String>) -> Self {
        self.rules = self.rules.scene(name, fields);
        self
    }

    /// Add a `"field.rule"` message
    #[must_use]
    pub fn message(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules = self.rules.message(key, message);
        self
    }

    /// Add a rule-type message
    #[must_use]
    pub fn type_message(mut self, rule: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules = self.rules.type_message(rule, message);
        self
    }

    /// Merge a whole rule set
    #[must_use]
    pub fn rule_set(mut self, set: RuleSet) -> Self {
        self.rules.rules.extend(set.rules);
        self.rules.scenes.extend(set.scenes);
        self.rules.messages.extend(set.messages);
        self.rules.type_messages.extend(set.type_messages);
        self
    }

    /// Select the scene the validator starts in
    #[must_use]
    pub fn active_scene(mut self, name: impl Into<String>) -> Self {
        self.scene = Some(name.into());
        self
    }

    /// Build the validator
    pub fn build(self) -> Validator {
        let registry = self.registry.unwrap_or_default();
        let mut validator = Validator::with_registry(self.config, registry);
        validator.apply(self.rules);
        if let Some(scene) = self.scene {
            validator.scene(scene);
        }
        validator
    }
}
