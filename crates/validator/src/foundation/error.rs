//! Error types for registry misconfiguration
//!
//! A failed validity test is *not* an error: it is recorded on the
//! [`ValidationContext`](crate::context::ValidationContext) as state.
//! [`ValidatorError`] covers the cases where a rule could not be evaluated
//! at all, such as an unknown rule name or a malformed parameter.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::foundation::ValidatorError;
//!
//! let error = ValidatorError::missing_param("min-length");
//! assert_eq!(error.to_string(), "rule 'min-length' requires a parameter");
//! ```

// ============================================================================
// VALIDATOR ERROR
// ============================================================================

/// Errors raised while resolving or evaluating a rule.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ValidatorError {
    /// No validity test is registered under this name.
    #[error("unknown validity test '{name}'")]
    UnknownTest {
        /// Requested test name.
        name: String,
    },

    /// No filter is registered under this name.
    #[error("unknown filter '{name}'")]
    UnknownFilter {
        /// Requested filter name.
        name: String,
    },

    /// The rule needs a parameter but the expression carried none.
    #[error("rule '{rule}' requires a parameter")]
    MissingParam {
        /// Rule name.
        rule: String,
    },

    /// The parameter could not be interpreted by the rule.
    #[error("rule '{rule}' cannot use parameter '{param}': {reason}")]
    InvalidParam {
        /// Rule name.
        rule: String,
        /// Raw parameter text.
        param: String,
        /// What was expected.
        reason: String,
    },

    /// A `match`-style parameter is not a valid regular expression.
    #[error("invalid pattern '{pattern}'")]
    InvalidPattern {
        /// Pattern text as written in the expression.
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A message catalog could not be parsed.
    #[error("invalid message catalog: {0}")]
    Catalog(#[from] serde_json::Error),
}

impl ValidatorError {
    /// Creates an [`UnknownTest`](Self::UnknownTest) error.
    pub fn unknown_test(name: impl Into<String>) -> Self {
        Self::UnknownTest { name: name.into() }
    }

    /// Creates an [`UnknownFilter`](Self::UnknownFilter) error.
    pub fn unknown_filter(name: impl Into<String>) -> Self {
        Self::UnknownFilter { name: name.into() }
    }

    /// Creates a [`MissingParam`](Self::MissingParam) error.
    pub fn missing_param(rule: impl Into<String>) -> Self {
        Self::MissingParam { rule: rule.into() }
    }

    /// Creates an [`InvalidParam`](Self::InvalidParam) error.
    pub fn invalid_param(
        rule: impl Into<String>,
        param: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParam {
            rule: rule.into(),
            param: param.into(),
            reason: reason.into(),
        }
    }
}

/// Result alias used by rule implementations.
pub type RuleResult<T> = Result<T, ValidatorError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unknown_rules() {
        assert_eq!(
            ValidatorError::unknown_test("nope").to_string(),
            "unknown validity test 'nope'"
        );
        assert_eq!(
            ValidatorError::unknown_filter("nope").to_string(),
            "unknown filter 'nope'"
        );
    }

    #[test]
    fn test_display_invalid_param() {
        let error = ValidatorError::invalid_param("min", "abc", "expected a number");
        assert_eq!(
            error.to_string(),
            "rule 'min' cannot use parameter 'abc': expected a number"
        );
    }

    #[test]
    fn test_pattern_error_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = ValidatorError::InvalidPattern {
            pattern: "/(/".to_owned(),
            source,
        };
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_catalog_error_from_json() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ValidatorError::from(source);
        assert!(matches!(error, ValidatorError::Catalog(_)));
    }
}
