//! Rule token parsing
//!
//! A rule token is `name` or `name:arg1,arg2,...`. Tokens are parsed once
//! when rules are configured; arguments stay strings and each rule coerces
//! them itself.

use std::fmt;

/// Separator between rule tokens in a field's rule list.
pub const RULE_SEPARATOR: char = '|';

/// Separator between a rule name and its arguments.
pub const ARGS_SEPARATOR: char = ':';

/// Separator between individual arguments.
pub const ARG_SEPARATOR: char = ',';

/// A parsed rule token.
///
/// # Examples
///
/// ```
/// use fieldcheck_rule::RuleSpec;
///
/// let spec = RuleSpec::parse("length:6,20");
/// assert_eq!(spec.name(), "length");
/// assert_eq!(spec.args(), ["6", "20"]);
/// assert_eq!(spec.raw(), "length:6,20");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleSpec {
    raw: String,
    name: String,
    args: Vec<String>,
}

impl RuleSpec {
    /// Parses a single rule token.
    ///
    /// A token with more than one `:` keeps only its name; everything after
    /// the first `:` is dropped, so `in:a:b` behaves like a bare `in`.
    pub fn parse(token: &str) -> Self {
        let mut parts = token.split(ARGS_SEPARATOR);
        let name = parts.next().unwrap_or_default();
        let args = match (parts.next(), parts.next()) {
            (Some(tail), None) => tail.split(ARG_SEPARATOR).map(str::to_owned).collect(),
            _ => Vec::new(),
        };

        Self {
            raw: token.to_owned(),
            name: name.to_owned(),
            args,
        }
    }

    /// Parses a `|`-separated rule list, preserving order.
    ///
    /// ```
    /// use fieldcheck_rule::RuleSpec;
    ///
    /// let specs = RuleSpec::parse_list("require|number|between:1,10");
    /// let names: Vec<_> = specs.iter().map(RuleSpec::name).collect();
    /// assert_eq!(names, ["require", "number", "between"]);
    /// ```
    pub fn parse_list(rules: &str) -> Vec<Self> {
        rules.split(RULE_SEPARATOR).map(Self::parse).collect()
    }

    /// The token exactly as configured.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The rule name used for registry lookup.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional arguments.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns true if this token names the given rule.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for RuleSpec {
    fn from(token: &str) -> Self {
        Self::parse(token)
    }
}
