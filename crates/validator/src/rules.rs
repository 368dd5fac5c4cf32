//! Rule definitions and the rule table
//!
//! A [`RuleSet`] maps names to [`TestRule`]s and [`FilterRule`]s and holds
//! per-test message overrides. [`RuleSet::builtin`] returns the standard
//! table; see [`validators`](crate::validators) and [`filters`](crate::filters).
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::rules::{RuleSet, TestRule};
//!
//! let mut rules = RuleSet::builtin();
//! rules.define_test(
//!     "even",
//!     TestRule::new(|value, _| Ok(value.as_i64().is_some_and(|n| n % 2 == 0)))
//!         .with_message("{label} must be even."),
//! );
//! ```

use crate::foundation::{MessageTemplate, RuleResult};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Predicate signature: `(value, param) -> passed`.
pub type TestFn = dyn Fn(&Value, Option<&str>) -> RuleResult<bool> + Send + Sync;

/// Transform signature: `(value, param) -> new value`.
pub type FilterFn = dyn Fn(&Value, Option<&str>) -> RuleResult<Value> + Send + Sync;

/// Message used when neither an override nor a rule default exists.
pub const FALLBACK_MESSAGE: &str = "{label} is invalid.";

// ============================================================================
// TEST RULE
// ============================================================================

/// A named validity predicate.
///
/// Non-complex tests are skipped (and pass) when the value is empty, so
/// that optional fields only need `not-empty` to become required.
#[derive(Clone)]
pub struct TestRule {
    check: Arc<TestFn>,
    message: MessageTemplate,
    complex: bool,
}

impl TestRule {
    /// Creates a simple test with the fallback message.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&Value, Option<&str>) -> RuleResult<bool> + Send + Sync + 'static,
    {
        Self {
            check: Arc::new(check),
            message: MessageTemplate::from(FALLBACK_MESSAGE),
            complex: false,
        }
    }

    /// Sets the default failure message.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<MessageTemplate>) -> Self {
        self.message = message.into();
        self
    }

    /// Marks the test as complex: it also runs on empty values.
    #[must_use = "builder methods must be chained or built"]
    pub fn complex(mut self) -> Self {
        self.complex = true;
        self
    }

    /// Whether the test runs on empty values.
    pub fn is_complex(&self) -> bool {
        self.complex
    }

    /// Default failure message.
    pub fn message(&self) -> &MessageTemplate {
        &self.message
    }

    /// Evaluates the predicate.
    pub fn check(&self, value: &Value, param: Option<&str>) -> RuleResult<bool> {
        (self.check)(value, param)
    }
}

impl fmt::Debug for TestRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRule")
            .field("message", &self.message)
            .field("complex", &self.complex)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// FILTER RULE
// ============================================================================

/// A named value transformation.
///
/// Non-complex filters do not run on absent or `null` fields.
#[derive(Clone)]
pub struct FilterRule {
    apply: Arc<FilterFn>,
    complex: bool,
}

impl FilterRule {
    /// Creates a simple filter.
    pub fn new<F>(apply: F) -> Self
    where
        F: Fn(&Value, Option<&str>) -> RuleResult<Value> + Send + Sync + 'static,
    {
        Self {
            apply: Arc::new(apply),
            complex: false,
        }
    }

    /// Marks the filter as complex: it also runs on absent fields.
    #[must_use = "builder methods must be chained or built"]
    pub fn complex(mut self) -> Self {
        self.complex = true;
        self
    }

    /// Whether the filter runs on absent fields.
    pub fn is_complex(&self) -> bool {
        self.complex
    }

    /// Applies the transformation.
    pub fn apply(&self, value: &Value, param: Option<&str>) -> RuleResult<Value> {
        (self.apply)(value, param)
    }
}

impl fmt::Debug for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterRule")
            .field("complex", &self.complex)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// Named tests, named filters and message overrides.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    tests: HashMap<String, TestRule>,
    filters: HashMap<String, FilterRule>,
    messages: HashMap<String, MessageTemplate>,
}

impl RuleSet {
    /// An empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard tests and filters.
    #[must_use]
    pub fn builtin() -> Self {
        let mut rules = Self::new();
        crate::validators::register(&mut rules);
        crate::filters::register(&mut rules);
        rules
    }

    /// Registers or replaces a test.
    pub fn define_test(&mut self, name: impl Into<String>, rule: TestRule) -> &mut Self {
        self.tests.insert(name.into(), rule);
        self
    }

    /// Registers or replaces a filter.
    pub fn define_filter(&mut self, name: impl Into<String>, rule: FilterRule) -> &mut Self {
        self.filters.insert(name.into(), rule);
        self
    }

    /// Overrides the message of a test without touching the test itself.
    pub fn set_message(
        &mut self,
        test: impl Into<String>,
        message: impl Into<MessageTemplate>,
    ) -> &mut Self {
        self.messages.insert(test.into(), message.into());
        self
    }

    /// Looks up a test.
    pub fn test(&self, name: &str) -> Option<&TestRule> {
        self.tests.get(name)
    }

    /// Looks up a filter.
    pub fn filter(&self, name: &str) -> Option<&FilterRule> {
        self.filters.get(name)
    }

    /// Resolves the message for a test: override, then the rule's default,
    /// then [`FALLBACK_MESSAGE`].
    pub fn message_for(&self, test: &str) -> MessageTemplate {
        self.messages
            .get(test)
            .or_else(|| self.tests.get(test).map(TestRule::message))
            .cloned()
            .unwrap_or_else(|| MessageTemplate::from(FALLBACK_MESSAGE))
    }

    /// Registered test names, unordered.
    pub fn test_names(&self) -> impl Iterator<Item = &str> {
        self.tests.keys().map(String::as_str)
    }

    /// Registered filter names, unordered.
    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }
}
