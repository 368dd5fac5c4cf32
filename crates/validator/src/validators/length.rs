//! Length tests: `min-length` and `max-length`
//!
//! Strings are measured in Unicode scalar values (chars), arrays by element
//! count. Other values are measured through their display form.

use crate::foundation::value;
use crate::rules::{RuleSet, TestRule};
use crate::validators::parse_param;
use serde_json::Value;

/// Measures a value for the length tests.
fn measure(input: &Value) -> usize {
    match input {
        Value::Array(items) => items.len(),
        other => value::display(other).chars().count(),
    }
}

pub(crate) fn register(rules: &mut RuleSet) {
    rules
        .define_test(
            "min-length",
            TestRule::new(|v, param| {
                let min: usize = parse_param("min-length", param, "a length")?;
                Ok(measure(v) >= min)
            })
            .with_message("{label} must be at least {param} characters."),
        )
        .define_test(
            "max-length",
            TestRule::new(|v, param| {
                let max: usize = parse_param("max-length", param, "a length")?;
                Ok(measure(v) <= max)
            })
            .with_message("{label} must be at most {param} characters."),
        );
}
