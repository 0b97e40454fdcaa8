//! # fieldcheck-rule
//!
//! Rule registry and built-in predicates for the fieldcheck validation engine.
//!
//! A rule is a named predicate over one field's value. Rules are looked up
//! by name at evaluation time, so callers can add their own or replace a
//! built-in without touching the engine.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck_rule::{RuleCall, RuleRegistry, RuleSpec};
//! use serde_json::{Map, json};
//!
//! let registry = RuleRegistry::new();
//! let spec = RuleSpec::parse("between:3,20");
//!
//! let bag = Map::new();
//! let value = json!(6.55);
//! let call = RuleCall::new(&value, spec.raw(), &bag, spec.args());
//! assert_eq!(registry.call(spec.name(), &call), Ok(true));
//! ```
//!
//! ## Built-in Rules
//!
//! - **Numeric**: `number`, `between`, `notBetween`, `max`, `min`
//! - **String**: `length`, `in`, `notIn`
//! - **Character class**: `chs`, `chsAlpha`, `chsAlphaNum`, `chsDash`,
//!   `alphaNum`, `colorHex`
//!
//! `require` is reserved for the engine's presence check and is never
//! dispatched through the registry.

pub mod builtins;
pub mod error;
pub mod registry;
pub mod spec;
pub mod value;

pub use builtins::{BUILTINS, BuiltinRule, REQUIRE};
pub use error::{RuleError, RuleResult};
pub use registry::{Predicate, RuleCall, RuleRegistry};
pub use spec::RuleSpec;
pub use value::{LengthMode, ValueKind};
