//! Numeric and equality tests
//!
//! `min`, `max`, `>`, `>=`, `<` and `<=` require a numeric parameter and fail
//! for values that are not numeric. `==` and `!=` compare numerically when
//! both sides are numbers and fall back to comparing display text.

use crate::foundation::{RuleResult, value};
use crate::rules::{RuleSet, TestRule};
use crate::validators::parse_param;
use serde_json::Value;

/// Evaluates `value <op> param` for a numeric rule.
fn compare(
    rule: &'static str,
    input: &Value,
    param: Option<&str>,
    op: fn(f64, f64) -> bool,
) -> RuleResult<bool> {
    let bound: f64 = parse_param(rule, param, "a number")?;
    Ok(value::as_number(input).is_some_and(|n| op(n, bound)))
}

/// Loose equality between a value and parameter text.
fn loosely_equal(input: &Value, param: Option<&str>) -> bool {
    let expected = param.unwrap_or_default();
    match (value::as_number(input), expected.trim().parse::<f64>()) {
        (Some(actual), Ok(expected)) => actual == expected,
        _ => value::display(input) == expected,
    }
}

fn numeric_rule(
    rule: &'static str,
    op: fn(f64, f64) -> bool,
    message: &'static str,
) -> TestRule {
    TestRule::new(move |v, param| compare(rule, v, param, op)).with_message(message)
}

pub(crate) fn register(rules: &mut RuleSet) {
    rules
        .define_test(
            "min",
            numeric_rule("min", |n, b| n >= b, "{label} must be at least {param}."),
        )
        .define_test(
            "max",
            numeric_rule("max", |n, b| n <= b, "{label} must be at most {param}."),
        )
        .define_test(
            ">",
            numeric_rule(">", |n, b| n > b, "{label} must be greater than {param}."),
        )
        .define_test(
            ">=",
            numeric_rule(">=", |n, b| n >= b, "{label} must be greater than or equal to {param}."),
        )
        .define_test(
            "<",
            numeric_rule("<", |n, b| n < b, "{label} must be less than {param}."),
        )
        .define_test(
            "<=",
            numeric_rule("<=", |n, b| n <= b, "{label} must be less than or equal to {param}."),
        )
        .define_test(
            "==",
            TestRule::new(|v, param| Ok(loosely_equal(v, param)))
                .with_message("{label} must be {param}."),
        )
        .define_test(
            "!=",
            TestRule::new(|v, param| Ok(!loosely_equal(v, param)))
                .with_message("{label} must not be {param}."),
        );
}
