//! End-to-end tests for `Validator::check`.

use fieldcheck_validator::{
    CheckMode, FieldOrder, RuleCall, RuleError, RuleSet, Validator, ValidatorConfig,
    ValidatorError, Values, default_message,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn bag(value: Value) -> Values {
    value.as_object().cloned().unwrap_or_default()
}

fn login_validator() -> Validator {
    let mut validator = Validator::new();
    validator
        .set_rules([("user", "require"), ("pass", "require"), ("vali", "require")])
        .set_scenes([("login", "user,pass")]);
    validator
}

// ============================================================================
// SCENES
// ============================================================================

#[test]
fn login_scene_checks_only_user_and_pass() {
    init_tracing();
    let mut validator = login_validator();
    validator.scene("login");

    let fields: Vec<_> = validator.check_set().into_iter().map(|(f, _)| f).collect();
    assert_eq!(fields, ["user", "pass"]);

    let values = bag(json!({ "user": "alice", "pass": "secret" }));
    assert!(validator.check(&values).unwrap());
}

#[test]
fn no_scene_checks_every_field() {
    let mut validator = login_validator();
    let values = bag(json!({ "user": "alice", "pass": "secret" }));

    assert!(!validator.check(&values).unwrap());
    assert_eq!(validator.last_error(), "vali rule[require] validation failed");
}

#[test]
fn scene_defined_after_selection_applies_on_next_check() {
    let mut validator = Validator::new();
    validator
        .set_rules([("user", "require"), ("vali", "require")])
        .scene("login");

    let values = bag(json!({ "user": "alice" }));
    assert!(!validator.check(&values).unwrap());

    validator.set_scenes([("login", "user")]);
    assert!(validator.check(&values).unwrap());
}

#[test]
fn rules_added_after_scene_selection_apply_on_next_check() {
    let mut validator = login_validator();
    validator.scene("login");

    let values = bag(json!({ "user": "alice", "pass": "abc" }));
    assert!(validator.check(&values).unwrap());

    validator.set_rules([("pass", "require|length:6,20")]);
    assert!(!validator.check(&values).unwrap());
    assert_eq!(validator.last_error(), "pass rule[length] validation failed");
}

#[test]
fn switching_back_to_default_scene() {
    let mut validator = login_validator();
    let values = bag(json!({ "user": "alice", "pass": "secret" }));

    validator.scene("login");
    assert!(validator.check(&values).unwrap());

    validator.scene("");
    assert!(!validator.check(&values).unwrap());
}

// ============================================================================
// PRESENCE
// ============================================================================

#[rstest]
#[case::absent(json!({}))]
#[case::empty_string(json!({ "name": "" }))]
fn required_field_missing_fails(#[case] values: Value) {
    let mut validator = Validator::new();
    validator.set_rules([("name", "require|chs")]);

    assert!(!validator.check(&bag(values)).unwrap());
    let failure = validator.last_failure().unwrap();
    assert!(failure.is_required());
    assert_eq!(failure.field, "name");
}

#[test]
fn required_field_runs_rules_in_listed_order() {
    let mut validator = Validator::new();
    validator.set_rules([("age", "between:1,10|require")]);
    assert!(!validator.check(&bag(json!({}))).unwrap());
    assert_eq!(validator.last_failure().unwrap().rule, "between");

    validator.set_rules([("age", "require|between:1,10")]);
    assert!(!validator.check(&bag(json!({}))).unwrap());
    assert_eq!(validator.last_failure().unwrap().rule, "require");
}

#[test]
fn optional_absent_field_is_skipped() {
    let mut validator = Validator::new();
    validator.set_rules([("nick", "length:3,5|alphaNum|undefinedRule")]);

    assert!(validator.check(&bag(json!({}))).unwrap());
    assert!(validator.check(&bag(json!({ "nick": "" }))).unwrap());
}

#[test]
fn optional_present_field_is_checked() {
    let mut validator = Validator::new();
    validator.set_rules([("nick", "length:3,5")]);
    assert!(!validator.check(&bag(json!({ "nick": "ab" }))).unwrap());
}

#[test]
fn null_counts_as_present() {
    let mut validator = Validator::new();
    validator.set_rules([("flag", "require")]);
    assert!(validator.check(&bag(json!({ "flag": null }))).unwrap());
}

// ============================================================================
// BUILT-INS THROUGH THE ENGINE
// ============================================================================

#[test]
fn between_accepts_float_in_range() {
    let mut validator = Validator::new();
    validator.set_rules([("a", "between:3,20")]);
    assert!(validator.check(&bag(json!({ "a": 6.55 }))).unwrap());
}

#[test]
fn not_in_then_min() {
    let mut validator = Validator::new();
    validator.set_rules([("b", "notIn:1,2,3|min:0")]);
    assert!(validator.check(&bag(json!({ "b": 10 }))).unwrap());
    assert!(!validator.check(&bag(json!({ "b": 2 }))).unwrap());
    assert_eq!(validator.last_failure().unwrap().rule, "notIn");
}

#[test]
fn length_failure_uses_synthesized_message() {
    let mut validator = Validator::new();
    validator.set_rules([("pass", "length:6,20")]);

    assert!(!validator.check(&bag(json!({ "pass": "123" }))).unwrap());
    assert_eq!(validator.last_error(), default_message("pass", "length"));
}

#[test]
fn length_failure_uses_override() {
    let mut validator = Validator::new();
    validator
        .set_rules([("pass", "length:6,20")])
        .set_messages([("pass.length", "password must be 6 to 20 characters")]);

    assert!(!validator.check(&bag(json!({ "pass": "123" }))).unwrap());
    assert_eq!(validator.last_error(), "password must be 6 to 20 characters");
}

#[test]
fn type_message_sits_between_override_and_default() {
    let mut validator = Validator::new();
    validator
        .set_rules([("code", "length:4"), ("pin", "length:4")])
        .set_type_messages([("length", "wrong length")])
        .set_messages([("pin.length", "pin is four digits")]);

    assert!(!validator.check(&bag(json!({ "code": "12" }))).unwrap());
    assert_eq!(validator.last_error(), "wrong length");

    assert!(!validator.check(&bag(json!({ "code": "1234", "pin": "1" }))).unwrap());
    assert_eq!(validator.last_error(), "pin is four digits");
}

#[test]
fn first_failure_wins() {
    let mut validator = Validator::new();
    validator.set_rules([("a", "number|length:10"), ("b", "require")]);

    assert!(!validator.check(&bag(json!({ "a": "abc" }))).unwrap());
    let failure = validator.last_failure().unwrap();
    assert_eq!((failure.field.as_str(), failure.rule.as_str()), ("a", "number"));
}

// ============================================================================
// CUSTOM RULES
// ============================================================================

#[test]
fn custom_rule_shadows_builtin() {
    let mut validator = Validator::new();
    validator.set_rules([("a", "number")]);
    assert!(validator.check(&bag(json!({ "a": 5 }))).unwrap());

    validator.register_rule("number", |_: &RuleCall<'_>| false);
    assert!(!validator.check(&bag(json!({ "a": 5 }))).unwrap());
}

#[test]
fn custom_rule_sees_raw_token_and_other_fields() {
    let mut validator = Validator::new();
    validator
        .register_rule("confirm", |call: &RuleCall<'_>| {
            call.args
                .first()
                .and_then(|other| call.field(other))
                .is_some_and(|other| other == call.value)
        })
        .register_rule("tagged", |call: &RuleCall<'_>| call.rule == "tagged:x:y")
        .set_rules([("repeat", "require|confirm:pass"), ("t", "tagged:x:y")]);

    let ok = bag(json!({ "pass": "hunter22", "repeat": "hunter22", "t": 1 }));
    assert!(validator.check(&ok).unwrap());

    let bad = bag(json!({ "pass": "hunter22", "repeat": "hunter2", "t": 1 }));
    assert!(!validator.check(&bad).unwrap());
    assert_eq!(validator.last_failure().unwrap().token, "confirm:pass");
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn malformed_arguments_are_configuration_errors() {
    let mut validator = Validator::new();
    validator.set_rules([("a", "between:5")]);

    let err = validator.check(&bag(json!({ "a": 7 }))).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(err.code(), "RULE:INVALID_ARGS");
    assert!(matches!(
        err.rule_error(),
        Some(RuleError::InvalidArguments { rule, .. }) if rule == "between"
    ));
    assert!(validator.last_failure().is_none());
}

#[test]
fn unknown_rule_is_configuration_error() {
    let mut validator = Validator::new();
    validator.set_rules([("age", "require|adult")]);

    let err = validator.check(&bag(json!({ "age": 30 }))).unwrap_err();
    assert!(matches!(
        err,
        ValidatorError::Configuration { ref field, source: RuleError::NotFound { ref name } }
            if field == "age" && name == "adult"
    ));
}

#[test]
fn fail_fast_escalates_failures() {
    let mut validator = Validator::new();
    validator
        .set_rules([("pass", "length:6,20")])
        .set_messages([("pass.length", "too short")]);

    let err = validator
        .check_with(&bag(json!({ "pass": "123" })), CheckMode::FailFast)
        .unwrap_err();
    assert_eq!(err.to_string(), "too short");
    assert_eq!(err.code(), "VALIDATE:FAILED");
    assert_eq!(validator.last_error(), "too short");

    assert!(validator.check_or_fail(&bag(json!({ "pass": "1234567" }))).is_ok());
}

#[test]
fn fail_fast_reports_missing_required_field_without_escalating() {
    let mut validator = Validator::new();
    validator.set_rules([("user", "require")]);

    assert_eq!(
        validator.check_with(&bag(json!({})), CheckMode::FailFast).ok(),
        Some(false)
    );
    assert!(validator.last_failure().unwrap().is_required());
    assert_eq!(validator.last_error(), "user rule[require] validation failed");

    assert!(validator.check_or_fail(&bag(json!({ "user": "" }))).is_ok());
    assert!(validator.last_failure().is_some());
}

#[rstest]
#[case::max_string_over("max:99.5", json!("abc"), true)]
#[case::max_number("max:99.5", json!(30), true)]
#[case::max_short_bound("max:2.5", json!("abc"), false)]
#[case::min_string("min:-1", json!("x"), true)]
#[case::min_number("min:-1", json!(0), true)]
#[case::min_number_below("min:-1", json!(-2), false)]
fn numeric_bounds_accept_any_value_shape(
    #[case] rules: &str,
    #[case] value: Value,
    #[case] expected: bool,
) {
    let mut validator = Validator::new();
    validator.set_rules([("age", rules)]);

    let mut values = Values::new();
    values.insert("age".into(), value);
    assert_eq!(validator.check(&values).ok(), Some(expected), "rules {rules}");
}

#[test]
fn non_finite_bound_is_configuration_error() {
    let mut validator = Validator::new();
    validator.set_rules([("a", "between:NaN,10")]);

    let err = validator.check(&bag(json!({ "a": 5 }))).unwrap_err();
    assert_eq!(err.code(), "RULE:INVALID_ARGS");
}

// ============================================================================
// ORDERING AND CONFIGURATION
// ============================================================================

#[test]
fn sorted_order_changes_reported_field() {
    let values = bag(json!({}));

    let mut insertion = Validator::new();
    insertion.set_rules([("zeta", "require"), ("alpha", "require")]);
    assert!(!insertion.check(&values).unwrap());
    assert_eq!(insertion.last_failure().unwrap().field, "zeta");

    let mut sorted =
        Validator::with_config(ValidatorConfig::default().with_field_order(FieldOrder::Sorted));
    sorted.set_rules([("zeta", "require"), ("alpha", "require")]);
    assert!(!sorted.check(&values).unwrap());
    assert_eq!(sorted.last_failure().unwrap().field, "alpha");
}

#[test]
fn apply_rule_set_from_json() {
    let set = RuleSet::from_value(json!({
        "rules": { "user": "require|alphaNum", "pass": "require|length:6,20" },
        "scenes": { "login": "user,pass" },
        "messages": { "user.alphaNum": "letters and digits only" }
    }))
    .unwrap();

    let mut validator = Validator::new();
    validator.apply(set).scene("login");

    assert!(!validator.check(&bag(json!({ "user": "a-b", "pass": "hunter22" }))).unwrap());
    assert_eq!(validator.last_error(), "letters and digits only");
}

#[test]
fn reconfiguration_upserts() {
    let mut validator = Validator::new();
    validator.set_rules([("a", "require")]);
    validator.set_rules([("a", "number")]);

    assert!(validator.check(&bag(json!({}))).unwrap());
    assert_eq!(validator.rules_for("a").map(<[_]>::len), Some(1));
}

#[test]
fn registry_and_messages_are_reachable_for_inspection() {
    let config = ValidatorConfig::default().with_field_order(FieldOrder::Sorted);
    let mut validator = Validator::with_config(config);
    assert_eq!(*validator.config(), config);

    validator
        .set_rules([("color", "colorHex")])
        .set_messages([("color.colorHex", "not a color"), ("color.colorHex", "bad color")]);
    assert_eq!(validator.messages().override_count(), 1);

    assert!(validator.registry_mut().unregister("colorHex"));
    let err = validator.check(&bag(json!({ "color": "#fff" }))).unwrap_err();
    assert_eq!(err.code(), "RULE:NOT_FOUND");
}
