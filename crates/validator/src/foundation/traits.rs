//! The registry seam consumed by validation contexts
//!
//! A [`ValidationContext`](crate::context::ValidationContext) does not know
//! how tests and filters are implemented or where field values come from.
//! It asks a [`Registry`] for all four.

use crate::foundation::{MessageTemplate, RuleResult};
use serde_json::Value;

// ============================================================================
// OUTCOMES
// ============================================================================

/// Result of running a validity test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestOutcome {
    /// Whether the test passed.
    pub passed: bool,
    /// The value the test looked at.
    pub value: Value,
}

impl TestOutcome {
    /// A passing outcome for `value`.
    #[must_use]
    pub fn passed(value: Value) -> Self {
        Self {
            passed: true,
            value,
        }
    }

    /// A failing outcome for `value`.
    #[must_use]
    pub fn failed(value: Value) -> Self {
        Self {
            passed: false,
            value,
        }
    }
}

/// Result of running a filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Whether the filter produced a new value.
    pub produced: bool,
    /// The produced value, or the untouched input when nothing was produced.
    pub value: Value,
}

impl FilterOutcome {
    /// A filter run that produced `value`.
    #[must_use]
    pub fn produced(value: Value) -> Self {
        Self {
            produced: true,
            value,
        }
    }

    /// A filter run that left the field alone.
    #[must_use]
    pub fn skipped(value: Value) -> Self {
        Self {
            produced: false,
            value,
        }
    }
}

// ============================================================================
// REGISTRY TRAIT
// ============================================================================

/// Source of field values, rule implementations and message templates.
///
/// The `filtered` / `filtered_value` pair passed to the `exec_*` methods is
/// the context's filter cache: when `filtered` is true the rule must work on
/// `filtered_value` instead of looking the field up again.
///
/// # Examples
///
/// ```rust,ignore
/// use fieldcheck_validator::prelude::*;
/// use serde_json::{json, Value};
///
/// struct AlwaysSeventeen;
///
/// impl Registry for AlwaysSeventeen {
///     fn fetch_existence_and_value(&self, _name: &str) -> Option<(bool, Value)> {
///         Some((true, json!(17)))
///     }
///     // ...
/// }
/// ```
pub trait Registry {
    /// Looks a field up by name.
    ///
    /// Returns `None` when the registry has no input to look in at all;
    /// callers treat that the same as an absent field.
    fn fetch_existence_and_value(&self, name: &str) -> Option<(bool, Value)>;

    /// Runs the validity test `test` against the field.
    fn exec_validity_test(
        &self,
        name: &str,
        filtered: bool,
        filtered_value: &Value,
        test: &str,
        param: Option<&str>,
    ) -> RuleResult<TestOutcome>;

    /// Runs the filter `filter` against the field.
    fn exec_filter(
        &self,
        name: &str,
        filtered: bool,
        filtered_value: &Value,
        filter: &str,
        param: Option<&str>,
    ) -> RuleResult<FilterOutcome>;

    /// Default message template for a failed `test`.
    fn message_for(&self, test: &str) -> MessageTemplate;
}
