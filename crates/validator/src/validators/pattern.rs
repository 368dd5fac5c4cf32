//! Pattern tests: `match`, `not-match` and `email`
//!
//! Patterns are written either bare (`match ^[a-z]+$`) or delimited with
//! trailing flags (`match /^[a-z]+$/i`). Supported flags are `i`, `m`, `s`
//! and `x`.

use crate::foundation::{RuleResult, ValidatorError, value};
use crate::rules::{RuleSet, TestRule};
use crate::validators::required_param;
use regex::{Regex, RegexBuilder};
use serde_json::Value;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Compiles a `match` parameter.
pub(crate) fn compile(rule: &str, param: Option<&str>) -> RuleResult<Regex> {
    let raw = required_param(rule, param)?;

    let (pattern, flags) = match raw.strip_prefix('/').and_then(|rest| rest.rsplit_once('/')) {
        Some((pattern, flags)) => (pattern, flags),
        None => (raw, ""),
    };

    let mut builder = RegexBuilder::new(pattern);
    for flag in flags.chars() {
        match flag {
            'i' => builder.case_insensitive(true),
            'm' => builder.multi_line(true),
            's' => builder.dot_matches_new_line(true),
            'x' => builder.ignore_whitespace(true),
            other => {
                return Err(ValidatorError::invalid_param(
                    rule,
                    raw,
                    format!("unsupported flag '{other}'"),
                ));
            }
        };
    }

    builder.build().map_err(|source| ValidatorError::InvalidPattern {
        pattern: raw.to_owned(),
        source,
    })
}

// Compiled per evaluation; each field check runs a pattern once.
fn matches(rule: &str, input: &Value, param: Option<&str>) -> RuleResult<bool> {
    let regex = compile(rule, param)?;
    Ok(regex.is_match(&value::display(input)))
}

pub(crate) fn register(rules: &mut RuleSet) {
    rules
        .define_test(
            "match",
            TestRule::new(|v, param| matches("match", v, param))
                .with_message("{label} has an invalid format."),
        )
        .define_test(
            "not-match",
            TestRule::new(|v, param| matches("not-match", v, param).map(|found| !found))
                .with_message("{label} has an invalid format."),
        )
        .define_test(
            "email",
            TestRule::new(|v, _| Ok(v.as_str().is_some_and(|s| EMAIL_REGEX.is_match(s))))
                .with_message("{label} must be a valid email address."),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn check(rule: &str, input: &Value, param: Option<&str>) -> RuleResult<bool> {
        RuleSet::builtin().test(rule).unwrap().check(input, param)
    }

    #[rstest]
    #[case("abc", "^[a-z]+$", true)]
    #[case("ABC", "^[a-z]+$", false)]
    #[case("ABC", "/^[a-z]+$/i", true)]
    #[case("a/b", "/^a\\/b$/", true)]
    #[case("x y", "/^x y$/", true)]
    #[case("line\nend", "/^end$/m", true)]
    fn test_match(#[case] input: &str, #[case] pattern: &str, #[case] expected: bool) {
        assert_eq!(check("match", &json!(input), Some(pattern)).unwrap(), expected);
        assert_eq!(check("not-match", &json!(input), Some(pattern)).unwrap(), !expected);
    }

    #[test]
    fn test_match_numbers_by_display() {
        assert!(check("match", &json!(2024), Some("^\\d{4}$")).unwrap());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            check("match", &json!("a"), Some("/(/")),
            Err(ValidatorError::InvalidPattern { .. })
        ));
        assert!(matches!(
            check("match", &json!("a"), Some("/a/q")),
            Err(ValidatorError::InvalidParam { .. })
        ));
    }

    #[rstest]
    #[case(json!("user@example.com"), true)]
    #[case(json!("first.last+tag@sub.example.org"), true)]
    #[case(json!("user@"), false)]
    #[case(json!("no-at-sign"), false)]
    #[case(json!(42), false)]
    fn test_email(#[case] input: Value, #[case] expected: bool) {
        assert_eq!(check("email", &input, None).unwrap(), expected);
    }
}
