//! # fieldcheck-validator
//!
//! Fluent, per-field validation of submitted form or request values.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::new(json!({ "age": "17", "name": "  " }));
//!
//! let age = validator.check("age").is("integer").is("min 18");
//! assert_eq!(age.message(), Some("age must be at least 18."));
//!
//! let name = validator.check_labeled("name", "Name").filter("trim").is("not-empty");
//! assert_eq!(name.value().as_ref(), &json!(""));
//! assert_eq!(name.message(), Some("Name is required."));
//! ```
//!
//! ## How a chain is evaluated
//!
//! A [`ValidationContext`](context::ValidationContext) runs tests
//! (`is`) and filters (`filter`) in order. Filters replace the value seen by
//! everything after them. The first failing test records its name and a
//! rendered message; every later call is a no-op.
//!
//! Rule implementations, field lookup and default messages come from a
//! [`Registry`](foundation::Registry). [`Validator`](validator::Validator)
//! is the built-in one, backed by a JSON object and a
//! [`RuleSet`](rules::RuleSet).
//!
//! ## Built-in rules
//!
//! - **Tests**: see [`validators`]
//! - **Filters**: see [`filters`]
//! - **Messages**: per-test defaults, overridable with
//!   [`MessageCatalog`](catalog::MessageCatalog)

pub mod catalog;
pub mod context;
pub mod filters;
pub mod foundation;
pub mod prelude;
pub mod report;
pub mod rules;
pub mod validator;
pub mod validators;
