//! Built-in filters
//!
//! | Name | Effect |
//! |---|---|
//! | `trim`, `ltrim`, `rtrim` | strip whitespace from strings |
//! | `lower`, `upper` | change case of strings |
//! | `ucfirst`, `lcfirst` | change case of the first character |
//! | `int` | number or numeric string to an integer (truncating), else `null` |
//! | `float` | number or numeric string to a float, else `null` |
//! | `string` | display form of any value |
//! | `default <text>` | replaces an empty or absent value with `<text>` |
//!
//! String filters leave non-string values untouched.

use crate::foundation::{RuleResult, ValidatorError, value};
use crate::rules::{FilterRule, RuleSet};
use serde_json::{Number, Value};

/// Builds a filter that maps string values and passes others through.
fn string_filter(map: fn(&str) -> String) -> FilterRule {
    FilterRule::new(move |v, _| {
        Ok(match v {
            Value::String(s) => Value::String(map(s)),
            other => other.clone(),
        })
    })
}

fn map_first_char(s: &str, map: impl FnOnce(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => map(first) + chars.as_str(),
        None => String::new(),
    }
}

fn to_int(input: &Value) -> Value {
    match input {
        Value::Number(n) if n.is_i64() || n.is_u64() => input.clone(),
        Value::Bool(b) => Value::from(i64::from(*b)),
        _ => match value::as_number(input) {
            Some(n) if n >= i64::MIN as f64 && n <= i64::MAX as f64 => Value::from(n.trunc() as i64),
            _ => Value::Null,
        },
    }
}

fn to_float(input: &Value) -> Value {
    value::as_number(input)
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

fn with_default(input: &Value, param: Option<&str>) -> RuleResult<Value> {
    let fallback = param.ok_or_else(|| ValidatorError::missing_param("default"))?;
    Ok(if value::is_empty(input) {
        Value::String(fallback.to_owned())
    } else {
        input.clone()
    })
}

/// Adds every built-in filter to `rules`.
pub fn register(rules: &mut RuleSet) {
    rules
        .define_filter("trim", string_filter(|s| s.trim().to_owned()))
        .define_filter("ltrim", string_filter(|s| s.trim_start().to_owned()))
        .define_filter("rtrim", string_filter(|s| s.trim_end().to_owned()))
        .define_filter("lower", string_filter(str::to_lowercase))
        .define_filter("upper", string_filter(str::to_uppercase))
        .define_filter(
            "ucfirst",
            string_filter(|s| map_first_char(s, |c| c.to_uppercase().collect())),
        )
        .define_filter(
            "lcfirst",
            string_filter(|s| map_first_char(s, |c| c.to_lowercase().collect())),
        )
        .define_filter("int", FilterRule::new(|v, _| Ok(to_int(v))))
        .define_filter("float", FilterRule::new(|v, _| Ok(to_float(v))))
        .define_filter(
            "string",
            FilterRule::new(|v, _| Ok(Value::String(value::display(v).into_owned()))),
        )
        .define_filter("default", FilterRule::new(with_default).complex());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn apply(filter: &str, input: Value, param: Option<&str>) -> Value {
        RuleSet::builtin()
            .filter(filter)
            .unwrap()
            .apply(&input, param)
            .unwrap()
    }

    #[rstest]
    #[case("trim", json!("  a b  "), json!("a b"))]
    #[case("ltrim", json!("  a  "), json!("a  "))]
    #[case("rtrim", json!("  a  "), json!("  a"))]
    #[case("lower", json!("MiXeD"), json!("mixed"))]
    #[case("upper", json!("straße"), json!("STRASSE"))]
    #[case("ucfirst", json!("élan vital"), json!("Élan vital"))]
    #[case("lcfirst", json!("ABC"), json!("aBC"))]
    #[case("ucfirst", json!(""), json!(""))]
    #[case("trim", json!(5), json!(5))]
    fn test_string_filters(#[case] filter: &str, #[case] input: Value, #[case] expected: Value) {
        assert_eq!(apply(filter, input, None), expected);
    }

    #[rstest]
    #[case(json!(7), json!(7))]
    #[case(json!(" 42 "), json!(42))]
    #[case(json!("3.9"), json!(3))]
    #[case(json!(-2.5), json!(-2))]
    #[case(json!(true), json!(1))]
    #[case(json!("abc"), Value::Null)]
    #[case(json!("1e300"), Value::Null)]
    fn test_int(#[case] input: Value, #[case] expected: Value) {
        assert_eq!(apply("int", input, None), expected);
    }

    #[test]
    fn test_float_and_string() {
        assert_eq!(apply("float", json!("2.5"), None), json!(2.5));
        assert_eq!(apply("float", json!("x"), None), Value::Null);
        assert_eq!(apply("string", json!(12), None), json!("12"));
        assert_eq!(apply("string", json!(null), None), json!(""));
    }

    #[test]
    fn test_default() {
        assert_eq!(apply("default", json!(""), Some("n/a")), json!("n/a"));
        assert_eq!(apply("default", Value::Null, Some("two words")), json!("two words"));
        assert_eq!(apply("default", json!("kept"), Some("n/a")), json!("kept"));

        let missing = RuleSet::builtin()
            .filter("default")
            .unwrap()
            .apply(&Value::Null, None);
        assert!(matches!(missing, Err(ValidatorError::MissingParam { .. })));
    }
}
