//! Built-in validity tests
//!
//! Every test is registered under a kebab-case name and receives the field
//! value plus the optional parameter text of its expression.
//!
//! # Categories
//!
//! - **Presence**: `empty`, `not-empty` (complex: they also see empty values)
//! - **Constant**: `pass`, `fail` (complex)
//! - **Length**: `min-length`, `max-length`
//! - **Numeric**: `min`, `max`, `>`, `>=`, `<`, `<=`, `==`, `!=`
//! - **Content**: `in`, `not-in`, `numeric`, `integer`, `alpha`,
//!   `alpha-numeric`, `array`, `not-array`
//! - **Pattern**: `match`, `not-match`, `email`
//! - **Network**: `url`
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::new(json!({ "nick": "bob" }));
//! let nick = validator
//!     .check("nick")
//!     .is("not-empty")
//!     .is("alpha-numeric")
//!     .is("min-length 4");
//! assert_eq!(nick.message(), Some("nick must be at least 4 characters."));
//! ```

use crate::foundation::{RuleResult, ValidatorError};
use crate::rules::RuleSet;
use std::str::FromStr;

pub mod boolean;
pub mod content;
pub mod length;
pub mod nullable;
pub mod pattern;
pub mod range;
pub mod url;

/// Adds every built-in test to `rules`.
pub fn register(rules: &mut RuleSet) {
    boolean::register(rules);
    nullable::register(rules);
    length::register(rules);
    range::register(rules);
    content::register(rules);
    pattern::register(rules);
    url::register(rules);
}

// ============================================================================
// PARAMETER HELPERS
// ============================================================================

/// Returns the parameter or a [`ValidatorError::MissingParam`].
pub(crate) fn required_param<'p>(rule: &str, param: Option<&'p str>) -> RuleResult<&'p str> {
    param
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ValidatorError::missing_param(rule))
}

/// Parses a required parameter.
pub(crate) fn parse_param<T: FromStr>(
    rule: &str,
    param: Option<&str>,
    expected: &str,
) -> RuleResult<T> {
    let raw = required_param(rule, param)?;
    raw.parse()
        .map_err(|_| ValidatorError::invalid_param(rule, raw, format!("expected {expected}")))
}
