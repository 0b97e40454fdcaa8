//! Numeric rules
//!
//! `max` and `min` dispatch on the runtime variant of the value: numbers are
//! compared by value, strings by length, anything else passes.

use serde_json::Value;

use super::{check_arg_count, check_min_arg_count, parse_bound};
use crate::error::RuleResult;
use crate::registry::RuleCall;
use crate::value::{ValueKind, to_float};

/// Number variant, or a string that contains at least one ASCII digit.
///
/// The string case is loose: `"abc1"` passes. Tightening it to a full
/// numeric parse would change the outcome for existing rule sets.
pub fn number(call: &RuleCall<'_>) -> RuleResult<bool> {
    Ok(is_number(call.value))
}

pub(crate) fn is_number(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => s.bytes().any(|b| b.is_ascii_digit()),
        _ => false,
    }
}

/// Inclusive range check on the value's numeric form.
pub fn between(call: &RuleCall<'_>) -> RuleResult<bool> {
    let (min, max) = bounds("between", call.args)?;
    Ok(to_float(call.value).is_some_and(|v| min <= v && v <= max))
}

/// Numeric value outside the inclusive range.
///
/// A value with no numeric form fails; it is not "outside" anything.
pub fn not_between(call: &RuleCall<'_>) -> RuleResult<bool> {
    let (min, max) = bounds("notBetween", call.args)?;
    Ok(to_float(call.value).is_some_and(|v| v < min || v > max))
}

/// Upper bound: `value <= bound` for numbers, `len <= bound` for strings.
///
/// The bound is always read as a number, so `max:99.5` is valid whatever
/// shape the value turns out to have.
pub fn max(call: &RuleCall<'_>) -> RuleResult<bool> {
    check_min_arg_count("max", call.args, 1)?;
    let bound = parse_bound("max", call.args, 0)?;
    Ok(match ValueKind::of(call.value) {
        ValueKind::Number => to_float(call.value).is_some_and(|v| v <= bound),
        ValueKind::String => (measure(call) as f64) <= bound,
        _ => true,
    })
}

/// Lower bound: `value > bound` for numbers, `len > bound` for strings.
///
/// The comparison is strict, unlike `max`, to stay compatible with
/// existing rule sets that were written against it.
pub fn min(call: &RuleCall<'_>) -> RuleResult<bool> {
    check_min_arg_count("min", call.args, 1)?;
    let bound = parse_bound("min", call.args, 0)?;
    Ok(match ValueKind::of(call.value) {
        ValueKind::Number => to_float(call.value).is_some_and(|v| v > bound),
        ValueKind::String => (measure(call) as f64) > bound,
        _ => true,
    })
}

fn bounds(rule: &str, args: &[String]) -> RuleResult<(f64, f64)> {
    check_arg_count(rule, args, 2)?;
    Ok((parse_bound(rule, args, 0)?, parse_bound(rule, args, 1)?))
}

fn measure(call: &RuleCall<'_>) -> usize {
    call.value
        .as_str()
        .map_or(0, |s| call.length_mode.measure(s))
}
