//! # fieldcheck-validator
//!
//! Declarative field validation driven by rule strings.
//!
//! Each field gets a `|`-separated list of rule tokens such as
//! `require|between:3,20`. Scenes pick which fields are checked, and
//! messages can be overridden per field and rule.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck_validator::{Validator, Values};
//! use serde_json::json;
//!
//! let mut validator = Validator::new();
//! validator
//!     .set_rules([
//!         ("user", "require|alphaNum"),
//!         ("pass", "require|length:6,20"),
//!         ("vali", "require|number"),
//!     ])
//!     .set_scenes([("login", "user,pass")])
//!     .scene("login");
//!
//! let values: Values = json!({ "user": "alice", "pass": "hunter22" })
//!     .as_object()
//!     .cloned()
//!     .unwrap_or_default();
//!
//! // `vali` is outside the login scene, so its absence is fine.
//! assert!(validator.check(&values).unwrap());
//! ```
//!
//! ## Evaluation
//!
//! - Fields are checked in a deterministic order (see [`FieldOrder`]).
//! - A field without `require` is skipped when absent or an empty string.
//! - The first failing rule stops the check; its message is kept in
//!   [`Validator::last_error`].
//! - Unknown rules and malformed arguments are reported as
//!   [`ValidatorError::Configuration`], never as a validation failure.

pub mod builder;
pub mod config;
pub mod error;
pub mod message;
pub mod validator;

pub use builder::ValidatorBuilder;
pub use config::{FieldOrder, RuleSet, ValidatorConfig};
pub use error::{ValidatorError, ValidatorResult};
pub use message::{Messages, default_message};
pub use validator::{CheckMode, Failure, Validator, Values};

pub use fieldcheck_rule::{
    LengthMode, Predicate, REQUIRE, RuleCall, RuleError, RuleRegistry, RuleResult, RuleSpec,
};
