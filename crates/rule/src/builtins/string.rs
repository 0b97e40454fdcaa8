//! String rules: length bounds and list membership

use super::parse_arg;
use crate::error::{RuleError, RuleResult};
use crate::registry::RuleCall;
use crate::value::to_text;

/// `length:min,max` checks an inclusive range, `length:n` an exact length.
///
/// Length is taken on the string form of the value, so `length:3` accepts
/// the number `123`.
pub fn length(call: &RuleCall<'_>) -> RuleResult<bool> {
    let len = call.length_mode.measure(&to_text(call.value));
    match call.args.len() {
        1 => {
            let exact: usize = parse_arg("length", call.args, 0)?;
            Ok(len == exact)
        }
        2 => {
            let min: usize = parse_arg("length", call.args, 0)?;
            let max: usize = parse_arg("length", call.args, 1)?;
            Ok(min <= len && len <= max)
        }
        n => Err(RuleError::invalid_arguments(
            "length",
            format!("expected 1 or 2 arguments, got {n}"),
        )),
    }
}

/// String form equals one of the arguments.
pub fn in_list(call: &RuleCall<'_>) -> RuleResult<bool> {
    Ok(contains(call))
}

/// Negation of [`in_list`].
pub fn not_in_list(call: &RuleCall<'_>) -> RuleResult<bool> {
    Ok(!contains(call))
}

fn contains(call: &RuleCall<'_>) -> bool {
    let text = to_text(call.value);
    call.args.iter().any(|arg| *arg == *text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::LengthMode;
    use serde_json::{Map, Value, json};

    fn run(
        rule: fn(&RuleCall<'_>) -> RuleResult<bool>,
        value: Value,
        args: &[&str],
    ) -> RuleResult<bool> {
        let bag = Map::new();
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        rule(&RuleCall::new(&value, "test", &bag, &args))
    }

    #[test]
    fn length_range() {
        assert_eq!(run(length, json!("123"), &["6", "20"]), Ok(false));
        assert_eq!(run(length, json!("123456"), &["6", "20"]), Ok(true));
        assert_eq!(run(length, json!("a".repeat(21)), &["6", "20"]), Ok(false));
    }

    #[test]
    fn length_exact_uses_string_form() {
        assert_eq!(run(length, json!("abcd"), &["4"]), Ok(true));
        assert_eq!(run(length, json!(1234), &["4"]), Ok(true));
        assert_eq!(run(length, json!("abc"), &["4"]), Ok(false));
    }

    #[test]
    fn length_arg_count_errors() {
        assert!(matches!(
            run(length, json!("abc"), &[]),
            Err(RuleError::InvalidArguments { .. })
        ));
        assert!(matches!(
            run(length, json!("abc"), &["1", "2", "3"]),
            Err(RuleError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn length_respects_mode() {
        let bag = Map::new();
        let value = json!("你好");
        let args = vec!["2".to_string()];
        let call = RuleCall::new(&value, "length:2", &bag, &args);
        assert_eq!(length(&call), Ok(true));
        assert_eq!(length(&call.with_length_mode(LengthMode::Bytes)), Ok(false));
    }

    #[test]
    fn membership() {
        assert_eq!(run(in_list, json!("b"), &["a", "b"]), Ok(true));
        assert_eq!(run(in_list, json!(2), &["1", "2", "3"]), Ok(true));
        assert_eq!(run(in_list, json!(10), &["1", "2", "3"]), Ok(false));
        assert_eq!(run(not_in_list, json!(10), &["1", "2", "3"]), Ok(true));
        assert_eq!(run(not_in_list, json!("1"), &["1", "2", "3"]), Ok(false));
    }

    #[test]
    fn empty_list_contains_nothing() {
        assert_eq!(run(in_list, json!("x"), &[]), Ok(false));
        assert_eq!(run(not_in_list, json!("x"), &[]), Ok(true));
    }
}
