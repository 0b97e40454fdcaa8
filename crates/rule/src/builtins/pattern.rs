//! Character-class rules
//!
//! Each rule is a whole-string regex match on the value's string form. The
//! CJK class covers the CJK Unified Ideographs block `U+4E00..=U+9FA5`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::RuleResult;
use crate::registry::RuleCall;
use crate::value::to_text;

static CHS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\x{4e00}-\x{9fa5}]+$").unwrap());

static CHS_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{4e00}-\x{9fa5}a-zA-Z]+$").unwrap());

static CHS_ALPHA_NUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{4e00}-\x{9fa5}a-zA-Z0-9]+$").unwrap());

static CHS_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{4e00}-\x{9fa5}a-zA-Z0-9_\-]+$").unwrap());

static ALPHA_NUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

static COLOR_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").unwrap());

fn matches(pattern: &Regex, call: &RuleCall<'_>) -> RuleResult<bool> {
    Ok(pattern.is_match(&to_text(call.value)))
}

/// Only CJK characters.
pub fn chs(call: &RuleCall<'_>) -> RuleResult<bool> {
    matches(&CHS, call)
}

/// CJK characters and ASCII letters.
pub fn chs_alpha(call: &RuleCall<'_>) -> RuleResult<bool> {
    matches(&CHS_ALPHA, call)
}

/// CJK characters, ASCII letters and digits.
pub fn chs_alpha_num(call: &RuleCall<'_>) -> RuleResult<bool> {
    matches(&CHS_ALPHA_NUM, call)
}

/// CJK characters, ASCII letters, digits, `_` and `-`.
pub fn chs_dash(call: &RuleCall<'_>) -> RuleResult<bool> {
    matches(&CHS_DASH, call)
}

/// ASCII letters and digits.
pub fn alpha_num(call: &RuleCall<'_>) -> RuleResult<bool> {
    matches(&ALPHA_NUM, call)
}

/// `#rgb` or `#rrggbb`.
pub fn color_hex(call: &RuleCall<'_>) -> RuleResult<bool> {
    matches(&COLOR_HEX, call)
}
