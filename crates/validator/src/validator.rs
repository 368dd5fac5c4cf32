//! Concrete registry over a JSON input document
//!
//! [`Validator`] owns the submitted values and a [`RuleSet`], and hands out
//! [`ValidationContext`]s bound to itself.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::new(json!({ "age": "17", "email": "a@example.com" }));
//!
//! let report: ValidationReport = [
//!     validator.check_labeled("age", "Age").is("not-empty").is("integer").is("min 18"),
//!     validator.check("email").is("not-empty").is("email"),
//! ]
//! .iter()
//! .map(ValidationContext::report)
//! .collect();
//!
//! assert!(report.is_invalid());
//! assert_eq!(report.errors()["age"], "Age must be at least 18.");
//! ```

use crate::catalog::MessageCatalog;
use crate::context::ValidationContext;
use crate::foundation::{
    FilterOutcome, MessageTemplate, Registry, RuleResult, TestOutcome, ValidatorError, value,
};
use crate::rules::{FilterRule, RuleSet, TestRule};
use serde_json::Value;

/// Registry backed by a JSON object of submitted values.
#[derive(Debug, Clone)]
pub struct Validator {
    input: Value,
    rules: RuleSet,
}

impl Validator {
    /// Creates a validator with the built-in rules.
    pub fn new(input: impl Into<Value>) -> Self {
        Self::with_rules(input, RuleSet::builtin())
    }

    /// Creates a validator with a custom rule set.
    pub fn with_rules(input: impl Into<Value>, rules: RuleSet) -> Self {
        Self {
            input: input.into(),
            rules,
        }
    }

    /// Applies every message of `catalog` as an override.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_catalog(mut self, catalog: &MessageCatalog) -> Self {
        catalog.apply_to(&mut self.rules);
        self
    }

    /// The submitted values.
    pub fn input(&self) -> &Value {
        &self.input
    }

    /// The rule table.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Registers or replaces a test.
    pub fn define_test(&mut self, name: impl Into<String>, rule: TestRule) -> &mut Self {
        self.rules.define_test(name, rule);
        self
    }

    /// Registers or replaces a filter.
    pub fn define_filter(&mut self, name: impl Into<String>, rule: FilterRule) -> &mut Self {
        self.rules.define_filter(name, rule);
        self
    }

    /// Overrides the default message of a test.
    pub fn set_message(
        &mut self,
        test: impl Into<String>,
        message: impl Into<MessageTemplate>,
    ) -> &mut Self {
        self.rules.set_message(test, message);
        self
    }

    /// Starts validating `name`, labelled by its own name.
    pub fn check(&self, name: impl Into<String>) -> ValidationContext<'_, Self> {
        ValidationContext::new(self, name)
    }

    /// Starts validating `name` with a display label.
    pub fn check_labeled(
        &self,
        name: impl Into<String>,
        label: impl Into<String>,
    ) -> ValidationContext<'_, Self> {
        ValidationContext::labeled(self, name, label)
    }

    /// The value a rule should see, and whether the field exists.
    fn subject(&self, name: &str, filtered: bool, filtered_value: &Value) -> (bool, Value) {
        if filtered {
            return (true, filtered_value.clone());
        }
        self.fetch_existence_and_value(name)
            .unwrap_or((false, Value::Null))
    }
}

impl Registry for Validator {
    fn fetch_existence_and_value(&self, name: &str) -> Option<(bool, Value)> {
        let found = value::lookup(&self.input, name)?;
        Some(match found {
            Some(value) => (true, value.clone()),
            None => (false, Value::Null),
        })
    }

    fn exec_validity_test(
        &self,
        name: &str,
        filtered: bool,
        filtered_value: &Value,
        test: &str,
        param: Option<&str>,
    ) -> RuleResult<TestOutcome> {
        let rule = self
            .rules
            .test(test)
            .ok_or_else(|| ValidatorError::unknown_test(test))?;
        let (_, subject) = self.subject(name, filtered, filtered_value);

        if !rule.is_complex() && value::is_empty(&subject) {
            return Ok(TestOutcome::passed(subject));
        }

        let passed = rule.check(&subject, param)?;
        Ok(TestOutcome {
            passed,
            value: subject,
        })
    }

    fn exec_filter(
        &self,
        name: &str,
        filtered: bool,
        filtered_value: &Value,
        filter: &str,
        param: Option<&str>,
    ) -> RuleResult<FilterOutcome> {
        let rule = self
            .rules
            .filter(filter)
            .ok_or_else(|| ValidatorError::unknown_filter(filter))?;
        let (exists, subject) = self.subject(name, filtered, filtered_value);

        if !rule.is_complex() && (!exists || subject.is_null()) {
            return Ok(FilterOutcome::skipped(subject));
        }

        rule.apply(&subject, param).map(FilterOutcome::produced)
    }

    fn message_for(&self, test: &str) -> MessageTemplate {
        self.rules.message_for(test)
    }
}
