//! Content tests
//!
//! Membership (`in`, `not-in`), number shape (`numeric`, `integer`),
//! character classes (`alpha`, `alpha-numeric`) and structure (`array`,
//! `not-array`).

use crate::foundation::{RuleResult, value};
use crate::rules::{RuleSet, TestRule};
use crate::validators::required_param;
use serde_json::Value;

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// Whether the display form of `input` is one of the comma separated items.
fn is_member(rule: &str, input: &Value, param: Option<&str>) -> RuleResult<bool> {
    let list = required_param(rule, param)?;
    let needle = value::display(input);
    Ok(list.split(',').map(str::trim).any(|item| item == needle))
}

// ============================================================================
// NUMBER SHAPE
// ============================================================================

fn is_numeric(input: &Value) -> bool {
    value::as_number(input).is_some()
}

fn is_integer(input: &Value) -> bool {
    match input {
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => s.trim().parse::<i64>().is_ok(),
        _ => false,
    }
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

fn all_chars(input: &Value, class: fn(char) -> bool) -> bool {
    match input {
        Value::String(s) => s.chars().all(class),
        Value::Number(_) => value::display(input).chars().all(class),
        _ => false,
    }
}

pub(crate) fn register(rules: &mut RuleSet) {
    rules
        .define_test(
            "in",
            TestRule::new(|v, param| is_member("in", v, param))
                .with_message("{label} must be one of: {param}."),
        )
        .define_test(
            "not-in",
            TestRule::new(|v, param| is_member("not-in", v, param).map(|found| !found))
                .with_message("{label} must not be one of: {param}."),
        )
        .define_test(
            "numeric",
            TestRule::new(|v, _| Ok(is_numeric(v))).with_message("{label} must be a number."),
        )
        .define_test(
            "integer",
            TestRule::new(|v, _| Ok(is_integer(v))).with_message("{label} must be an integer."),
        )
        .define_test(
            "alpha",
            TestRule::new(|v, _| Ok(all_chars(v, char::is_alphabetic)))
                .with_message("{label} must contain only letters."),
        )
        .define_test(
            "alpha-numeric",
            TestRule::new(|v, _| Ok(all_chars(v, char::is_alphanumeric)))
                .with_message("{label} must contain only letters and digits."),
        )
        .define_test(
            "array",
            TestRule::new(|v, _| Ok(v.is_array())).with_message("{label} must be a list."),
        )
        .define_test(
            "not-array",
            TestRule::new(|v, _| Ok(!v.is_array())).with_message("{label} must not be a list."),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ValidatorError;
    use rstest::rstest;
    use serde_json::json;

    fn check(rule: &str, input: &Value, param: Option<&str>) -> RuleResult<bool> {
        RuleSet::builtin().test(rule).unwrap().check(input, param)
    }

    #[rstest]
    #[case(json!("green"), true)]
    #[case(json!("blue"), true)]
    #[case(json!("pink"), false)]
    #[case(json!(2), true)]
    fn test_membership(#[case] input: Value, #[case] expected: bool) {
        let list = Some("red, green,blue , 2");
        assert_eq!(check("in", &input, list).unwrap(), expected);
        assert_eq!(check("not-in", &input, list).unwrap(), !expected);
    }

    #[test]
    fn test_membership_requires_list() {
        assert!(matches!(
            check("in", &json!("a"), None),
            Err(ValidatorError::MissingParam { .. })
        ));
    }

    #[rstest]
    #[case(json!(3), true, true)]
    #[case(json!(-3.5), true, false)]
    #[case(json!(" 42 "), true, true)]
    #[case(json!("4.2e1"), true, false)]
    #[case(json!("forty"), false, false)]
    #[case(json!([1]), false, false)]
    fn test_number_shape(#[case] input: Value, #[case] numeric: bool, #[case] integer: bool) {
        assert_eq!(check("numeric", &input, None).unwrap(), numeric);
        assert_eq!(check("integer", &input, None).unwrap(), integer);
    }

    #[rstest]
    #[case(json!("abc"), true, true)]
    #[case(json!("Zoë"), true, true)]
    #[case(json!("abc123"), false, true)]
    #[case(json!("ab c"), false, false)]
    #[case(json!(123), false, true)]
    #[case(json!(true), false, false)]
    fn test_character_classes(
        #[case] input: Value,
        #[case] alpha: bool,
        #[case] alpha_numeric: bool,
    ) {
        assert_eq!(check("alpha", &input, None).unwrap(), alpha);
        assert_eq!(check("alpha-numeric", &input, None).unwrap(), alpha_numeric);
    }

    #[test]
    fn test_array_structure() {
        assert!(check("array", &json!([1]), None).unwrap());
        assert!(!check("array", &json!("1"), None).unwrap());
        assert!(check("not-array", &json!({"a": 1}), None).unwrap());
    }
}
