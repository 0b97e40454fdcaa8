//! Built-in rules
//!
//! Every built-in is a plain `fn` with the predicate signature, registered
//! by name in [`register_all`]. `require` is not here: the engine handles it
//! before any rule is dispatched.

pub mod numeric;
pub mod pattern;
pub mod string;

use std::str::FromStr;

use crate::error::{RuleError, RuleResult};
use crate::registry::{RuleCall, RuleRegistry};

/// Signature shared by all built-in rules.
pub type BuiltinRule = fn(&RuleCall<'_>) -> RuleResult<bool>;

/// Name of the rule the engine treats as a presence check.
pub const REQUIRE: &str = "require";

/// Every built-in rule, by registered name.
pub const BUILTINS: &[(&str, BuiltinRule)] = &[
    ("number", numeric::number),
    ("between", numeric::between),
    ("notBetween", numeric::not_between),
    ("max", numeric::max),
    ("min", numeric::min),
    ("length", string::length),
    ("in", string::in_list),
    ("notIn", string::not_in_list),
    ("chs", pattern::chs),
    ("chsAlpha", pattern::chs_alpha),
    ("chsAlphaNum", pattern::chs_alpha_num),
    ("chsDash", pattern::chs_dash),
    ("alphaNum", pattern::alpha_num),
    ("colorHex", pattern::color_hex),
];

/// Registers every built-in rule.
pub fn register_all(registry: &mut RuleRegistry) {
    for (name, rule) in BUILTINS {
        registry.register_fallible(*name, *rule);
    }
}

/// Helper to check argument count
pub(crate) fn check_arg_count(rule: &str, args: &[String], expected: usize) -> RuleResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuleError::invalid_arguments(
            rule,
            format!("expected {expected} arguments, got {}", args.len()),
        ))
    }
}

/// Helper to check minimum argument count
pub(crate) fn check_min_arg_count(rule: &str, args: &[String], min: usize) -> RuleResult<()> {
    if args.len() < min {
        Err(RuleError::invalid_arguments(
            rule,
            format!("expected at least {min} arguments, got {}", args.len()),
        ))
    } else {
        Ok(())
    }
}

/// Parses one argument, naming the rule and position on failure.
pub(crate) fn parse_arg<T: FromStr>(rule: &str, args: &[String], index: usize) -> RuleResult<T> {
    let raw = args.get(index).map(String::as_str).unwrap_or_default();
    raw.trim().parse().map_err(|_| {
        RuleError::invalid_arguments(
            rule,
            format!("argument {} must be a number, got '{raw}'", index + 1),
        )
    })
}

/// Parses a finite numeric bound; `NaN` and infinities are rejected.
pub(crate) fn parse_bound(rule: &str, args: &[String], index: usize) -> RuleResult<f64> {
    let bound: f64 = parse_arg(rule, args, index)?;
    if bound.is_finite() {
        Ok(bound)
    } else {
        Err(RuleError::invalid_arguments(
            rule,
            format!("argument {} must be finite, got {bound}", index + 1),
        ))
    }
}
