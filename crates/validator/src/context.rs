//! Per-field validation context
//!
//! A [`ValidationContext`] follows one field through a chain of validity
//! tests ([`is`](ValidationContext::is)) and filters
//! ([`filter`](ValidationContext::filter)). The first failing test wins:
//! after it, every further call leaves the context untouched.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::new(json!({ "name": "  " }));
//! let name = validator
//!     .check_labeled("name", "Your name")
//!     .filter("trim")
//!     .is("not-empty");
//!
//! assert!(name.is_invalid());
//! assert_eq!(name.test(), Some("not-empty"));
//! assert_eq!(name.message(), Some("Your name is required."));
//! ```

use crate::foundation::{MessageTemplate, Registry, RuleExpr, ValidatorError};
use crate::report::FieldReport;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION CONTEXT
// ============================================================================

/// Validation state of a single field during one validation pass.
pub struct ValidationContext<'r, R: ?Sized> {
    registry: &'r R,
    name: String,
    label: String,

    filtered: bool,
    filtered_value: Value,

    valid: bool,
    test: Option<String>,
    message: Option<String>,
}

impl<'r, R> ValidationContext<'r, R>
where
    R: Registry + ?Sized,
{
    /// Creates a context whose label is the field name.
    pub fn new(registry: &'r R, name: impl Into<String>) -> Self {
        let name = name.into();
        Self::labeled(registry, name.clone(), name)
    }

    /// Creates a context with a display label.
    ///
    /// An empty label falls back to the field name.
    pub fn labeled(registry: &'r R, name: impl Into<String>, label: impl Into<String>) -> Self {
        let name = name.into();
        let label = label.into();
        let label = if label.is_empty() { name.clone() } else { label };

        Self {
            registry,
            name,
            label,
            filtered: false,
            filtered_value: Value::Null,
            valid: true,
            test: None,
            message: None,
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Field name used for registry lookups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Label used in rendered messages.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current value of the field.
    ///
    /// The last filtered value when a filter has produced one; otherwise the
    /// registry's value, or `null` when the field is absent.
    pub fn value(&self) -> Cow<'_, Value> {
        if self.filtered {
            return Cow::Borrowed(&self.filtered_value);
        }
        match self.registry.fetch_existence_and_value(&self.name) {
            Some((true, value)) => Cow::Owned(value),
            Some((false, _)) | None => Cow::Owned(Value::Null),
        }
    }

    /// True until a test fails.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Inverse of [`is_valid`](Self::is_valid).
    pub fn is_invalid(&self) -> bool {
        !self.valid
    }

    /// Whether a filter has produced a value.
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Name of the first failed test.
    pub fn test(&self) -> Option<&str> {
        self.test.as_deref()
    }

    /// Rendered message of the first failed test.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Snapshot of the current state.
    pub fn report(&self) -> FieldReport {
        FieldReport {
            name: self.name.clone(),
            label: self.label.clone(),
            valid: self.valid,
            test: self.test.clone(),
            message: self.message.clone(),
            value: self.value().into_owned(),
        }
    }

    // ------------------------------------------------------------------------
    // Chain
    // ------------------------------------------------------------------------

    /// Runs a validity test such as `"not-empty"` or `"min-length 3"`.
    ///
    /// Does nothing when an earlier test already failed.
    #[must_use = "the context carries the validation result"]
    pub fn is(mut self, test: &str) -> Self {
        self.run_test(test, None);
        self
    }

    /// Runs a validity test with a custom failure message.
    ///
    /// An empty text message uses the registry's default instead.
    #[must_use = "the context carries the validation result"]
    pub fn is_with(mut self, test: &str, message: impl Into<MessageTemplate>) -> Self {
        self.run_test(test, Some(message.into()));
        self
    }

    /// Applies a filter such as `"trim"` or `"default n/a"`.
    ///
    /// Does nothing when an earlier test already failed.
    #[must_use = "the context carries the validation result"]
    pub fn filter(mut self, filter: &str) -> Self {
        let expr = RuleExpr::parse(filter);
        self.run_filter(expr.name, expr.param.map(Cow::Borrowed));
        self
    }

    /// Applies a filter with a separately supplied parameter.
    ///
    /// The parameter is appended, space separated, to any parameter already
    /// present in `filter`.
    #[must_use = "the context carries the validation result"]
    pub fn filter_with(mut self, filter: &str, param: &str) -> Self {
        let expr = RuleExpr::parse(filter);
        let param = match expr.param {
            Some(inline) => Cow::Owned(format!("{inline} {param}")),
            None => Cow::Borrowed(param),
        };
        self.run_filter(expr.name, Some(param));
        self
    }

    fn run_test(&mut self, test: &str, message: Option<MessageTemplate>) {
        if !self.valid {
            tracing::trace!(field = %self.name, test, "skipping test on invalid field");
            return;
        }

        let RuleExpr { name, param } = RuleExpr::parse(test);
        let outcome = self.registry.exec_validity_test(
            &self.name,
            self.filtered,
            &self.filtered_value,
            name,
            param,
        );

        match outcome {
            Ok(outcome) if outcome.passed => {}
            Ok(outcome) => {
                let template = message
                    .filter(|m| !m.is_blank())
                    .unwrap_or_else(|| self.registry.message_for(name));
                let rendered = template.render(param, &outcome.value, &self.label);
                tracing::debug!(field = %self.name, test = name, message = %rendered, "validity test failed");
                self.fail(name, rendered);
            }
            Err(error) => self.fail_with_error(name, &error),
        }
    }

    fn run_filter(&mut self, filter: &str, param: Option<Cow<'_, str>>) {
        if !self.valid {
            tracing::trace!(field = %self.name, filter, "skipping filter on invalid field");
            return;
        }

        let outcome = self.registry.exec_filter(
            &self.name,
            self.filtered,
            &self.filtered_value,
            filter,
            param.as_deref(),
        );

        match outcome {
            Ok(outcome) if outcome.produced => {
                tracing::debug!(field = %self.name, filter, "filter produced a value");
                self.filtered = true;
                self.filtered_value = outcome.value;
            }
            Ok(_) => {}
            Err(error) => self.fail_with_error(filter, &error),
        }
    }

    fn fail(&mut self, rule: &str, message: String) {
        self.valid = false;
        self.test = Some(rule.to_owned());
        self.message = Some(message);
    }

    fn fail_with_error(&mut self, rule: &str, error: &ValidatorError) {
        tracing::warn!(field = %self.name, rule, %error, "rule could not be evaluated");
        self.fail(rule, error.to_string());
    }
}

impl<R: ?Sized> fmt::Debug for ValidationContext<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("filtered", &self.filtered)
            .field("filtered_value", &self.filtered_value)
            .field("valid", &self.valid)
            .field("test", &self.test)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
